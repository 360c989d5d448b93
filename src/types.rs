//! Core types for the schedule engine

use serde::Serialize;
use thiserror::Error;

/// Result type alias for schedule operations
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// The five positional fields of a cron expression, in expression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// All fields in expression order.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Inclusive numeric domain for this field.
    ///
    /// Day-of-week allows 0-7; both 0 and 7 mean Sunday.
    pub fn domain(&self) -> (u32, u32) {
        match self {
            FieldKind::Minute => (0, 59),
            FieldKind::Hour => (0, 23),
            FieldKind::DayOfMonth => (1, 31),
            FieldKind::Month => (1, 12),
            FieldKind::DayOfWeek => (0, 7),
        }
    }

    /// Field name as shown in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day-of-month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day-of-week",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a field token failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// A numeric atom did not parse as an integer
    NotANumber,
    /// A numeric atom fell outside the field's domain
    OutOfRange,
    /// A range's start exceeds its end
    BadRangeOrder,
    /// A step value was missing, non-numeric, or zero
    BadStep,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            InvalidReason::NotANumber => "not a number",
            InvalidReason::OutOfRange => "value out of range",
            InvalidReason::BadRangeOrder => "range start exceeds end",
            InvalidReason::BadStep => "invalid step value",
        };
        f.write_str(msg)
    }
}

/// Schedule engine errors
///
/// Every error names the offending field and reason so the caller can
/// render inline, field-specific feedback.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleError {
    /// The expression did not split into exactly 5 fields
    #[error("expected 5 fields, got {found}")]
    MalformedExpression { found: usize },

    /// A field token failed its domain or syntax rule
    #[error("invalid {field} field '{token}': {reason}")]
    InvalidField {
        field: FieldKind,
        token: String,
        reason: InvalidReason,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_domains() {
        assert_eq!(FieldKind::Minute.domain(), (0, 59));
        assert_eq!(FieldKind::Hour.domain(), (0, 23));
        assert_eq!(FieldKind::DayOfMonth.domain(), (1, 31));
        assert_eq!(FieldKind::Month.domain(), (1, 12));
        assert_eq!(FieldKind::DayOfWeek.domain(), (0, 7));
    }

    #[test]
    fn test_field_order() {
        let names: Vec<&str> = FieldKind::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["minute", "hour", "day-of-month", "month", "day-of-week"]
        );
    }

    #[test]
    fn test_error_display() {
        let err = ScheduleError::MalformedExpression { found: 4 };
        assert_eq!(err.to_string(), "expected 5 fields, got 4");

        let err = ScheduleError::InvalidField {
            field: FieldKind::Minute,
            token: "60".to_string(),
            reason: InvalidReason::OutOfRange,
        };
        assert_eq!(
            err.to_string(),
            "invalid minute field '60': value out of range"
        );
    }

    #[test]
    fn test_error_serializes_for_inline_feedback() {
        let err = ScheduleError::InvalidField {
            field: FieldKind::Hour,
            token: "25".to_string(),
            reason: InvalidReason::OutOfRange,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "invalid_field");
        assert_eq!(json["field"], "hour");
        assert_eq!(json["reason"], "out_of_range");
    }
}
