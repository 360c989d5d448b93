//! Preset catalog of common backup cadences
//!
//! A fixed, hand-authored list the dashboard offers as quick-select
//! buttons. Presets carry curated descriptions that take precedence over
//! the translator's pattern heuristics.

use serde::Serialize;

/// A named, pre-described schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CronPreset {
    /// Short label shown on the quick-select button
    pub label: &'static str,
    /// Curated human-readable description
    pub description: &'static str,
    /// The exact cron expression this preset stands for
    pub expression: &'static str,
    /// Icon name for the dashboard to render
    pub icon: &'static str,
}

/// Quick-select presets, in display order.
const PRESETS: &[CronPreset] = &[
    CronPreset {
        label: "Nightly",
        description: "Daily at 2 AM",
        expression: "0 2 * * *",
        icon: "moon",
    },
    CronPreset {
        label: "Midnight",
        description: "Daily at midnight",
        expression: "0 0 * * *",
        icon: "clock",
    },
    CronPreset {
        label: "After hours",
        description: "Weekdays (Mon-Fri) at 6 PM",
        expression: "0 18 * * 1-5",
        icon: "briefcase",
    },
    CronPreset {
        label: "Weekly",
        description: "Weekly on Sunday at midnight",
        expression: "0 0 * * 0",
        icon: "calendar",
    },
    CronPreset {
        label: "Monthly",
        description: "Monthly on the 1st at midnight",
        expression: "0 0 1 * *",
        icon: "calendar-days",
    },
    CronPreset {
        label: "Every 6 hours",
        description: "Every 6 hours",
        expression: "0 */6 * * *",
        icon: "repeat",
    },
    CronPreset {
        label: "Every 12 hours",
        description: "Every 12 hours",
        expression: "0 */12 * * *",
        icon: "repeat",
    },
    CronPreset {
        label: "Twice daily",
        description: "Twice daily at 6 AM and 6 PM",
        expression: "0 6,18 * * *",
        icon: "sunrise",
    },
];

/// The full preset catalog, in display order.
pub fn presets() -> &'static [CronPreset] {
    PRESETS
}

/// Look up a preset by exact expression string.
///
/// Comparison is literal: `0 2 * * *` and `00 02 * * *` are different
/// strings and therefore different schedules as far as presets are
/// concerned, even though they fire at the same times.
pub fn find_by_expression(expression: &str) -> Option<&'static CronPreset> {
    PRESETS.iter().find(|p| p.expression == expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    #[test]
    fn test_catalog_size() {
        assert!(presets().len() >= 7);
    }

    #[test]
    fn test_all_preset_expressions_validate() {
        for preset in presets() {
            assert!(
                validate(preset.expression).is_ok(),
                "preset '{}' has an invalid expression",
                preset.label
            );
        }
    }

    #[test]
    fn test_find_by_expression() {
        let preset = find_by_expression("0 2 * * *").unwrap();
        assert_eq!(preset.label, "Nightly");
        assert_eq!(preset.description, "Daily at 2 AM");
    }

    #[test]
    fn test_lookup_is_exact_not_semantic() {
        assert!(find_by_expression("0 2 * * *").is_some());
        // Same schedule, different spelling: not a preset match
        assert!(find_by_expression("00 02 * * *").is_none());
        assert!(find_by_expression(" 0 2 * * *").is_none());
    }

    #[test]
    fn test_expressions_unique() {
        for (i, a) in presets().iter().enumerate() {
            for b in presets().iter().skip(i + 1) {
                assert_ne!(a.expression, b.expression);
            }
        }
    }

    #[test]
    fn test_preset_serializes() {
        let json = serde_json::to_value(presets()[0]).unwrap();
        assert_eq!(json["label"], "Nightly");
        assert_eq!(json["expression"], "0 2 * * *");
        assert_eq!(json["icon"], "moon");
    }
}
