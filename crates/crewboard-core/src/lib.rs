//! # Crewboard Core Library
//!
//! This library provides the client-side core for the Crewboard workforce
//! scheduler. It talks to a constraint-solver backend over HTTP and turns
//! its schedule payloads into render-ready timeline projections. The CLI
//! binary is a thin view layer over this library.
//!
//! ## Architecture
//!
//! - **Schedule model**: the backend's wire types (resources, demands,
//!   solver status), replaced wholesale on every fetch
//! - **Timeline**: rebuilds the by-resource and by-site panels from a
//!   schedule, classifying availability conflicts per demand
//! - **Analysis**: parses solver score strings and ranks the
//!   per-constraint breakdown for display
//! - **Session**: owns the loaded schedule and the solve lifecycle,
//!   polling the backend while a solve is active
//!
//! ## Key Components
//!
//! - [`ScheduleSession`]: solve lifecycle and polling state machine
//! - [`SolverClient`]: typed wrapper over the backend's six endpoints
//! - [`ScheduleProjection`]: both timeline panels plus the unassigned count
//! - [`Config`]: TOML configuration management

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod schedule;
pub mod score;
pub mod session;
pub mod timeline;

pub use analysis::{rank_constraints, ConstraintAnalysis, RankedConstraint, RowIcon, ScoreAnalysis, ScoreTier};
pub use client::SolverClient;
pub use config::Config;
pub use error::{ApiError, ConfigError, CoreError, Result};
pub use schedule::{Demand, Resource, Schedule, SolverStatus};
pub use score::ScoreVector;
pub use session::{PollState, ScheduleSession, SolveControls, DEFAULT_POLL_INTERVAL};
pub use timeline::{classify_demand, has_skill_mismatch, DemandClass, ScheduleProjection};
