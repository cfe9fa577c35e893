//! Score string parsing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static TIER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tier_pattern() -> &'static Regex {
    TIER_PATTERN.get_or_init(|| {
        Regex::new(r"(-?\d*(\.\d+)?)(hard|medium|soft)").expect("tier pattern is valid")
    })
}

/// Numeric hard/medium/soft components of a solver score string.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreVector {
    pub hard: f64,
    pub medium: f64,
    pub soft: f64,
}

impl ScoreVector {
    /// Parse a `"<n>hard/<n>medium/<n>soft"` style score string.
    ///
    /// Tiers absent from the string stay 0. Malformed input never fails;
    /// text that does not match a tier is ignored, and an unparseable
    /// magnitude counts as 0.
    pub fn parse(score: &str) -> Self {
        let mut components = Self::default();
        for caps in tier_pattern().captures_iter(score) {
            let magnitude: f64 = caps[1].parse().unwrap_or(0.0);
            match &caps[3] {
                "hard" => components.hard = magnitude,
                "medium" => components.medium = magnitude,
                "soft" => components.soft = magnitude,
                _ => unreachable!("pattern only matches known tiers"),
            }
        }
        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_all_three_tiers() {
        let v = ScoreVector::parse("5hard/0medium/-3soft");
        assert_eq!(v, ScoreVector { hard: 5.0, medium: 0.0, soft: -3.0 });
    }

    #[test]
    fn absent_tiers_stay_zero() {
        let v = ScoreVector::parse("2medium");
        assert_eq!(v, ScoreVector { hard: 0.0, medium: 2.0, soft: 0.0 });
    }

    #[test]
    fn empty_string_is_all_zero() {
        assert_eq!(ScoreVector::parse(""), ScoreVector::default());
    }

    #[test]
    fn handles_negative_and_fractional_magnitudes() {
        let v = ScoreVector::parse("-1.5hard/0.25medium/-0.75soft");
        assert_eq!(v, ScoreVector { hard: -1.5, medium: 0.25, soft: -0.75 });
    }

    #[test]
    fn malformed_input_does_not_fail() {
        let v = ScoreVector::parse("garbage/12banana/hard");
        // A bare "hard" matches with an empty magnitude, which counts as 0.
        assert_eq!(v, ScoreVector::default());
    }

    proptest! {
        #[test]
        fn never_panics_on_arbitrary_input(s in ".*") {
            let _ = ScoreVector::parse(&s);
        }

        #[test]
        fn roundtrips_integer_scores(hard in -1000i64..1000, medium in -1000i64..1000, soft in -1000i64..1000) {
            let v = ScoreVector::parse(&format!("{hard}hard/{medium}medium/{soft}soft"));
            prop_assert_eq!(v.hard, hard as f64);
            prop_assert_eq!(v.medium, medium as f64);
            prop_assert_eq!(v.soft, soft as f64);
        }
    }
}
