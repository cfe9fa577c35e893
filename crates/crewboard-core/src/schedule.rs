//! Schedule domain model as served by the solver backend.
//!
//! A schedule is loaded wholesale on every fetch and superseded on the
//! next one; nothing here is merged incrementally. Wire field names are
//! camelCase to match the backend JSON.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Solver lifecycle status reported with every schedule payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolverStatus {
    NotSolving,
    SolvingScheduled,
    SolvingActive,
}

impl SolverStatus {
    pub fn is_solving(&self) -> bool {
        !matches!(self, Self::NotSolving)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotSolving => "NOT_SOLVING",
            Self::SolvingScheduled => "SOLVING_SCHEDULED",
            Self::SolvingActive => "SOLVING_ACTIVE",
        }
    }
}

/// A schedulable worker with qualifications and per-date availability
/// preferences. `name` is unique and doubles as the grouping key in the
/// by-resource projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub qualifications: Vec<String>,
    /// Whole days on which the resource must not be scheduled.
    #[serde(default)]
    pub unavailable_dates: Vec<NaiveDate>,
    /// Whole days on which the resource prefers not to be scheduled.
    #[serde(default)]
    pub undesired_dates: Vec<NaiveDate>,
}

/// A time-bounded work requirement at a construction site, optionally
/// fulfilled by a resource.
///
/// The embedded `resource` is a snapshot taken by the solver, not a
/// reference into [`Schedule::resources`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demand {
    pub construction_site: String,
    /// Zone-less local datetimes, as emitted by the backend.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub required_qualifications: String,
    #[serde(default)]
    pub resource: Option<Resource>,
}

impl Demand {
    pub fn is_assigned(&self) -> bool {
        self.resource.is_some()
    }
}

/// One full solver payload: score, status and the entity lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Raw score string, e.g. `"0hard/0medium/-120soft"`. `None` until
    /// the first solve.
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub solver_status: Option<SolverStatus>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub demands: Vec<Demand>,
}

impl Schedule {
    /// Whether the backend reports this schedule as being solved right now.
    pub fn is_solving(&self) -> bool {
        self.solver_status.map(|s| s.is_solving()).unwrap_or(false)
    }

    /// Display label for the score line.
    pub fn score_label(&self) -> String {
        match &self.score {
            Some(score) => format!("Score: {score}"),
            None => "Score: ?".to_string(),
        }
    }
}
