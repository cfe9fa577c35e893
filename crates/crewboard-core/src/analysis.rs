//! Score analysis: per-constraint breakdown ranking.
//!
//! The backend returns one [`ConstraintAnalysis`] record per constraint,
//! carrying raw score and weight strings. [`rank_constraints`] sorts them
//! severity-first and derives the display fields for the analysis table.

use crate::score::ScoreVector;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One constraint entry of the backend's score-analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintAnalysis {
    pub name: String,
    /// Total score contribution, e.g. `"-6hard/0medium/0soft"`.
    pub score: String,
    /// Per-match weight, e.g. `"1hard"`.
    pub weight: String,
    #[serde(default)]
    pub matches: Vec<serde_json::Value>,
}

/// The full analysis payload returned by `PUT /schedules/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreAnalysis {
    #[serde(default)]
    pub constraints: Vec<ConstraintAnalysis>,
}

/// Severity tier a constraint is weighted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Hard,
    Medium,
    Soft,
}

impl ScoreTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Medium => "medium",
            Self::Soft => "soft",
        }
    }
}

/// Icon shown in the leading column of an analysis row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon {
    /// Hard constraint with a negative score: infeasible.
    Warning,
    /// No matches at all: the constraint is fully satisfied.
    Satisfied,
    None,
}

/// A constraint annotated and positioned for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedConstraint {
    pub name: String,
    pub tier: ScoreTier,
    /// Numeric weight of the tier that set [`RankedConstraint::tier`].
    pub weight: f64,
    /// First non-zero tier of the constraint's own score, hard first.
    pub implicit_score: f64,
    pub match_count: usize,
}

impl RankedConstraint {
    pub fn icon(&self) -> RowIcon {
        if self.tier == ScoreTier::Hard && self.implicit_score < 0.0 {
            RowIcon::Warning
        } else if self.match_count == 0 {
            RowIcon::Satisfied
        } else {
            RowIcon::None
        }
    }
}

/// Severity ordering of two parsed scores, most severe first.
///
/// Rule order is part of the contract, including the second rule's
/// cross-tier check of `a`'s hard component against `b`'s soft
/// component. Do not symmetrize it; table order depends on it.
pub fn severity_order(a: &ScoreVector, b: &ScoreVector) -> Ordering {
    if a.hard < 0.0 && b.hard > 0.0 {
        return Ordering::Less;
    }
    if a.hard > 0.0 && b.soft < 0.0 {
        return Ordering::Greater;
    }
    if a.hard.abs() > b.hard.abs() {
        return Ordering::Less;
    }
    if a.medium < 0.0 && b.medium > 0.0 {
        return Ordering::Less;
    }
    if a.medium > 0.0 && b.medium < 0.0 {
        return Ordering::Greater;
    }
    if a.medium.abs() > b.medium.abs() {
        return Ordering::Less;
    }
    if a.soft < 0.0 && b.soft > 0.0 {
        return Ordering::Less;
    }
    if a.soft > 0.0 && b.soft < 0.0 {
        return Ordering::Greater;
    }
    b.soft
        .abs()
        .partial_cmp(&a.soft.abs())
        .unwrap_or(Ordering::Equal)
}

/// Sort constraints by score severity, then derive the display fields.
///
/// The displayed tier and weight come from the constraint's weight
/// string (first non-zero tier, hard before medium before soft); the
/// implicit score comes from the same precedence applied to its score
/// string. The sort itself compares parsed scores, not weights.
pub fn rank_constraints(constraints: &[ConstraintAnalysis]) -> Vec<RankedConstraint> {
    let mut parsed: Vec<(ScoreVector, &ConstraintAnalysis)> = constraints
        .iter()
        .map(|c| (ScoreVector::parse(&c.score), c))
        .collect();
    parsed.sort_by(|(a, _), (b, _)| severity_order(a, b));

    parsed
        .into_iter()
        .map(|(score, c)| {
            let weight = ScoreVector::parse(&c.weight);
            let tier = if weight.hard != 0.0 {
                ScoreTier::Hard
            } else if weight.medium != 0.0 {
                ScoreTier::Medium
            } else {
                ScoreTier::Soft
            };
            let weight_value = match tier {
                ScoreTier::Hard => weight.hard,
                ScoreTier::Medium => weight.medium,
                ScoreTier::Soft => weight.soft,
            };
            let implicit_score = if score.hard != 0.0 {
                score.hard
            } else if score.medium != 0.0 {
                score.medium
            } else {
                score.soft
            };
            RankedConstraint {
                name: c.name.clone(),
                tier,
                weight: weight_value,
                implicit_score,
                match_count: c.matches.len(),
            }
        })
        .collect()
}
