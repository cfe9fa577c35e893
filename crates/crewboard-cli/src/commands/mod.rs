//! Subcommand implementations.

use crewboard_core::{Config, SolverClient};

pub mod analyze;
pub mod config;
pub mod demo;
pub mod schedule;
pub mod solve;
pub mod stop;

/// Pick the demo dataset to operate on: the explicit argument, then the
/// configured default, then the first id the backend lists.
pub(crate) async fn resolve_demo_id(
    client: &SolverClient,
    config: &Config,
    explicit: Option<String>,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(id) = explicit.or_else(|| config.demo_data_id.clone()) {
        return Ok(id);
    }
    let ids = client.demo_data_ids().await?;
    ids.into_iter()
        .next()
        .ok_or_else(|| "No demo data available.".into())
}
