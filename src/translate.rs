//! Expression validation and human-readable translation
//!
//! Translation runs in three stages: validate all five fields, short-circuit
//! on an exact preset match, then try a fixed priority-ordered list of shape
//! patterns. Patterns are mutually exclusive by field shape and the first
//! match wins; anything unrecognized falls through to a generic clause
//! rendering.

use tracing::trace;

use crate::presets;
use crate::types::{FieldKind, Result, ScheduleError};
use crate::field;

/// Shape classification of one validated field token, as seen by the
/// pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldShape {
    /// `*`
    Wildcard,
    /// A single numeric value
    Fixed(u32),
    /// `*/n`
    Step(u32),
    /// Any other valid token: range, list, stepped range
    Other,
}

fn classify(token: &str) -> FieldShape {
    if token == "*" {
        return FieldShape::Wildcard;
    }
    if let Ok(value) = token.parse::<u32>() {
        return FieldShape::Fixed(value);
    }
    if let Some(n) = token.strip_prefix("*/").and_then(|s| s.parse::<u32>().ok()) {
        return FieldShape::Step(n);
    }
    FieldShape::Other
}

/// The five fields of a validated expression, both raw and classified.
struct ShapeRow<'a> {
    fields: [&'a str; 5],
    shapes: [FieldShape; 5],
}

impl<'a> ShapeRow<'a> {
    fn new(fields: [&'a str; 5]) -> Self {
        Self {
            fields,
            shapes: fields.map(classify),
        }
    }

    fn weekday_token(&self) -> &'a str {
        self.fields[4]
    }
}

type Pattern = fn(&ShapeRow) -> Option<String>;

/// Recognized schedule shapes, in priority order. First match wins.
const PATTERNS: &[Pattern] = &[
    daily_on_the_hour,
    weekly_at_midnight,
    monthly_at_midnight,
    hourly_interval,
    weekday_at_time,
    daily_at_time,
];

fn daily_on_the_hour(row: &ShapeRow) -> Option<String> {
    use FieldShape::*;
    match row.shapes {
        [Fixed(0), Fixed(hour), Wildcard, Wildcard, Wildcard] => {
            Some(format!("Daily at {}", format_time(hour, 0)))
        }
        _ => None,
    }
}

fn weekly_at_midnight(row: &ShapeRow) -> Option<String> {
    use FieldShape::*;
    match row.shapes {
        [Fixed(0), Fixed(0), Wildcard, Wildcard, Fixed(day)] => {
            Some(format!("Weekly on {} at midnight", weekday_name(day)))
        }
        _ => None,
    }
}

fn monthly_at_midnight(row: &ShapeRow) -> Option<String> {
    use FieldShape::*;
    match row.shapes {
        [Fixed(0), Fixed(0), Fixed(day), Wildcard, Wildcard] => Some(format!(
            "Monthly on the {}{} at midnight",
            day,
            ordinal_suffix(day)
        )),
        _ => None,
    }
}

fn hourly_interval(row: &ShapeRow) -> Option<String> {
    use FieldShape::*;
    match row.shapes {
        [Fixed(0), Step(n), Wildcard, Wildcard, Wildcard] => Some(format!("Every {} hours", n)),
        _ => None,
    }
}

fn weekday_at_time(row: &ShapeRow) -> Option<String> {
    use FieldShape::*;
    match row.shapes {
        [Fixed(minute), Fixed(hour), Wildcard, Wildcard, weekday] if weekday != Wildcard => {
            Some(format!(
                "{} at {}",
                weekday_phrase(row.weekday_token()),
                format_time(hour, minute)
            ))
        }
        _ => None,
    }
}

fn daily_at_time(row: &ShapeRow) -> Option<String> {
    use FieldShape::*;
    match row.shapes {
        [Fixed(minute), Fixed(hour), Wildcard, Wildcard, Wildcard] => {
            Some(format!("Daily at {}", format_time(hour, minute)))
        }
        _ => None,
    }
}

/// Generic rendering for shapes no pattern recognizes: only the
/// non-wildcard fields become clauses, in field order. An all-wildcard
/// expression has no clauses to show.
fn fallback(row: &ShapeRow) -> String {
    let [minute, hour, day, month, weekday] = row.fields;
    let mut clauses = Vec::new();

    if minute != "*" || hour != "*" {
        clauses.push(format!("at {}:{}", hour, pad_minute(minute)));
    }
    if day != "*" {
        clauses.push(format!("on day {}", day));
    }
    if month != "*" {
        clauses.push(format!("in month {}", month));
    }
    if weekday != "*" {
        clauses.push(format!("on {}", weekday_phrase(weekday)));
    }

    if clauses.is_empty() {
        return "Custom cron expression".to_string();
    }
    format!("Custom schedule: {}", clauses.join(", "))
}

fn pad_minute(token: &str) -> String {
    match token.parse::<u32>() {
        Ok(minute) => format!("{:02}", minute),
        Err(_) => token.to_string(),
    }
}

/// Render a 24-hour time on a 12-hour clock. The minute suffix is omitted
/// on the hour; hour 0 is 12 AM and hour 12 is 12 PM.
fn format_time(hour: u32, minute: u32) -> String {
    let (display, meridiem) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    if minute == 0 {
        format!("{} {}", display, meridiem)
    } else {
        format!("{}:{:02} {}", display, minute, meridiem)
    }
}

/// Both 0 and 7 mean Sunday.
fn weekday_name(day: u32) -> &'static str {
    match day {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Sunday",
    }
}

/// Phrase for a weekday token. Single values map to day names; the two
/// compound aliases `1-5` and `6,0`/`0,6` get curated wording. Any other
/// multi-value token renders literally.
fn weekday_phrase(token: &str) -> String {
    if let Ok(day) = token.parse::<u32>() {
        return weekday_name(day).to_string();
    }
    match token {
        "1-5" => "Weekdays (Mon-Fri)".to_string(),
        "6,0" | "0,6" => "Weekends".to_string(),
        _ => format!("Day {}", token),
    }
}

/// Standard English ordinal suffix: 11, 12, 13 (and any number ending in
/// them) take "th".
fn ordinal_suffix(n: u32) -> &'static str {
    if matches!(n % 100, 11..=13) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Split an expression and validate each field against its domain,
/// fail-fast in field order.
fn checked_fields(expression: &str) -> Result<[&str; 5]> {
    let tokens: Vec<&str> = expression.split_whitespace().collect();
    let fields: [&str; 5] = tokens
        .try_into()
        .map_err(|tokens: Vec<&str>| ScheduleError::MalformedExpression {
            found: tokens.len(),
        })?;

    for (kind, token) in FieldKind::ALL.iter().zip(fields.iter()) {
        let (min, max) = kind.domain();
        field::check(token, min, max).map_err(|reason| ScheduleError::InvalidField {
            field: *kind,
            token: (*token).to_string(),
            reason,
        })?;
    }

    Ok(fields)
}

/// Validate a 5-field cron expression.
///
/// # Examples
///
/// ```
/// use cron_describe::validate;
///
/// assert!(validate("0 2 * * *").is_ok());
/// assert!(validate("60 2 * * *").is_err());
/// ```
pub fn validate(expression: &str) -> Result<()> {
    checked_fields(expression).map(|_| ())
}

/// Translate a cron expression into a human-readable phrase.
///
/// Preset expressions return their curated description verbatim; other
/// valid expressions go through shape-pattern recognition with a generic
/// fallback. Invalid input returns a typed error, never a phrase.
///
/// # Examples
///
/// ```
/// use cron_describe::translate;
///
/// assert_eq!(translate("0 2 * * *").unwrap(), "Daily at 2 AM");
/// assert_eq!(translate("0 */6 * * *").unwrap(), "Every 6 hours");
/// assert_eq!(translate("30 14 * * *").unwrap(), "Daily at 2:30 PM");
/// ```
pub fn translate(expression: &str) -> Result<String> {
    let fields = checked_fields(expression)?;

    if let Some(preset) = presets::find_by_expression(expression) {
        trace!(expression, preset = preset.label, "matched preset");
        return Ok(preset.description.to_string());
    }

    let row = ShapeRow::new(fields);
    for pattern in PATTERNS {
        if let Some(phrase) = pattern(&row) {
            return Ok(phrase);
        }
    }

    trace!(expression, "no shape pattern matched, using fallback");
    Ok(fallback(&row))
}
