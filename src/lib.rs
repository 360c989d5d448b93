//! Cron schedule expression engine
//!
//! Parses, validates, and translates standard 5-field cron expressions
//! into human-readable descriptions for the backup dashboard's schedule
//! form:
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-7, 0 and 7 = Sunday)
//! │ │ │ │ │
//! * * * * *
//! ```
//!
//! The engine is pure and stateless: every call is a function of the input
//! string and a fixed preset catalog. It does not compute fire times,
//! handle timezones, or execute anything.
//!
//! ## Quick Start
//!
//! ```
//! use cron_describe::{translate, validate, presets};
//!
//! assert!(validate("0 2 * * *").is_ok());
//! assert_eq!(translate("0 2 * * *").unwrap(), "Daily at 2 AM");
//! assert_eq!(translate("0 18 * * 1-5").unwrap(), "Weekdays (Mon-Fri) at 6 PM");
//!
//! // Invalid input is a typed error naming the offending field
//! let err = translate("60 2 * * *").unwrap_err();
//! assert_eq!(err.to_string(), "invalid minute field '60': value out of range");
//!
//! // Fixed catalog of common schedules for quick-select UI
//! assert!(presets().len() >= 7);
//! ```

pub mod field;
mod presets;
mod translate;
mod types;

pub use presets::{find_by_expression, presets, CronPreset};
pub use translate::{translate, validate};
pub use types::{FieldKind, InvalidReason, Result, ScheduleError};
