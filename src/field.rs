//! Single-field token validation
//!
//! Each cron field is validated independently against its numeric domain.
//! Supported token forms:
//! - `*` - any value
//! - `5` - single value
//! - `1-5` - inclusive range
//! - `1,2,3` - list of single values
//! - `*/6` or `9-17/2` - step over a wildcard or range base
//!
//! Lists may only contain single values; a list element that is itself a
//! range or step is rejected.

use crate::types::InvalidReason;

/// Check whether `token` is a valid field against the inclusive domain
/// `[min, max]`.
///
/// # Examples
///
/// ```
/// use cron_describe::field;
///
/// assert!(field::is_valid("*", 0, 59));
/// assert!(field::is_valid("*/15", 0, 59));
/// assert!(field::is_valid("9-17", 0, 23));
/// assert!(!field::is_valid("60", 0, 59));
/// ```
pub fn is_valid(token: &str, min: u32, max: u32) -> bool {
    check(token, min, max).is_ok()
}

/// Validate a field token, reporting why it is invalid.
///
/// Dispatch is syntactic: a token containing `/` is a step, otherwise one
/// containing `,` is a list, otherwise one containing `-` is a range,
/// otherwise a wildcard or single value.
pub(crate) fn check(token: &str, min: u32, max: u32) -> Result<(), InvalidReason> {
    if token == "*" {
        return Ok(());
    }

    if let Some((base, step)) = token.split_once('/') {
        return check_step(base, step, min, max);
    }

    if token.contains(',') {
        // List elements must be plain single values
        for atom in token.split(',') {
            parse_single(atom, min, max)?;
        }
        return Ok(());
    }

    if let Some((start, end)) = token.split_once('-') {
        return check_range(start, end, min, max);
    }

    parse_single(token, min, max).map(|_| ())
}

fn parse_single(atom: &str, min: u32, max: u32) -> Result<u32, InvalidReason> {
    let value: u32 = atom.parse().map_err(|_| InvalidReason::NotANumber)?;
    if value < min || value > max {
        return Err(InvalidReason::OutOfRange);
    }
    Ok(value)
}

fn check_range(start: &str, end: &str, min: u32, max: u32) -> Result<(), InvalidReason> {
    let start = parse_single(start, min, max)?;
    let end = parse_single(end, min, max)?;
    if start > end {
        // Wrapping ranges are not supported
        return Err(InvalidReason::BadRangeOrder);
    }
    Ok(())
}

fn check_step(base: &str, step: &str, min: u32, max: u32) -> Result<(), InvalidReason> {
    let n: u32 = step.parse().map_err(|_| InvalidReason::BadStep)?;
    if n == 0 {
        return Err(InvalidReason::BadStep);
    }
    if base == "*" {
        return Ok(());
    }
    if let Some((start, end)) = base.split_once('-') {
        return check_range(start, end, min, max);
    }
    parse_single(base, min, max).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_always_valid() {
        assert!(is_valid("*", 0, 59));
        assert!(is_valid("*", 1, 12));
    }

    #[test]
    fn test_single_value_bounds() {
        assert!(is_valid("0", 0, 59));
        assert!(is_valid("59", 0, 59));
        assert!(!is_valid("60", 0, 59));
        assert!(is_valid("1", 1, 31));
        assert!(!is_valid("0", 1, 31));
        assert!(!is_valid("32", 1, 31));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(check("abc", 0, 59), Err(InvalidReason::NotANumber));
        assert_eq!(check("", 0, 59), Err(InvalidReason::NotANumber));
        assert_eq!(check("-5", 0, 59), Err(InvalidReason::NotANumber));
    }

    #[test]
    fn test_range() {
        assert!(is_valid("9-17", 0, 23));
        assert!(is_valid("0-59", 0, 59));
        assert!(is_valid("5-5", 0, 59));
        assert!(!is_valid("9-24", 0, 23));
    }

    #[test]
    fn test_range_order() {
        assert_eq!(check("5-1", 0, 59), Err(InvalidReason::BadRangeOrder));
        assert_eq!(check("5-1", 0, 23), Err(InvalidReason::BadRangeOrder));
        assert_eq!(check("5-1", 1, 31), Err(InvalidReason::BadRangeOrder));
        assert_eq!(check("5-1", 1, 12), Err(InvalidReason::BadRangeOrder));
        assert_eq!(check("5-1", 0, 7), Err(InvalidReason::BadRangeOrder));
    }

    #[test]
    fn test_list() {
        assert!(is_valid("1,3,5", 0, 7));
        assert!(is_valid("6,18", 0, 23));
        assert!(!is_valid("1,60", 0, 59));
    }

    #[test]
    fn test_list_of_ranges_rejected() {
        assert_eq!(check("1-5,7", 0, 23), Err(InvalidReason::NotANumber));
    }

    #[test]
    fn test_step() {
        assert!(is_valid("*/6", 0, 23));
        assert!(is_valid("*/15", 0, 59));
        assert!(is_valid("9-17/2", 0, 23));
        assert!(is_valid("30/5", 0, 59));
    }

    #[test]
    fn test_bad_step() {
        assert_eq!(check("*/0", 0, 59), Err(InvalidReason::BadStep));
        assert_eq!(check("*/x", 0, 59), Err(InvalidReason::BadStep));
        assert_eq!(check("*/", 0, 59), Err(InvalidReason::BadStep));
    }

    #[test]
    fn test_step_base_validated() {
        assert_eq!(check("60/5", 0, 59), Err(InvalidReason::OutOfRange));
        assert_eq!(check("17-9/2", 0, 23), Err(InvalidReason::BadRangeOrder));
    }

    #[test]
    fn test_weekday_domain_allows_seven() {
        assert!(is_valid("0", 0, 7));
        assert!(is_valid("7", 0, 7));
        assert!(!is_valid("8", 0, 7));
    }
}
