//! Schedule session: loaded state, solve lifecycle and polling.
//!
//! A [`ScheduleSession`] owns everything a view needs between renders:
//! the selected demo dataset, the active solve job, the last schedule
//! payload and the solve/stop control visibility. All mutation goes
//! through its methods; there is no ambient shared state.
//!
//! Fetch responses carry a generation number and a stale response is
//! dropped instead of overwriting a newer one.

use crate::analysis::{rank_constraints, RankedConstraint};
use crate::client::SolverClient;
use crate::error::{CoreError, Result};
use crate::schedule::Schedule;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use uuid::Uuid;

/// Poll cadence while a solve is running.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Whether the session is currently auto-refreshing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Polling,
}

/// Visibility of the solve/stop controls.
///
/// Exactly one of the two is visible at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveControls {
    pub solve_visible: bool,
    pub stop_visible: bool,
}

impl SolveControls {
    pub fn new() -> Self {
        Self {
            solve_visible: true,
            stop_visible: false,
        }
    }

    pub fn set_solving(&mut self, solving: bool) {
        self.solve_visible = !solving;
        self.stop_visible = solving;
    }
}

impl Default for SolveControls {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable session state around one solver backend.
#[derive(Debug)]
pub struct ScheduleSession {
    client: SolverClient,
    demo_data_id: Option<String>,
    job_id: Option<Uuid>,
    schedule: Option<Schedule>,
    controls: SolveControls,
    poll_state: PollState,
    poll_interval: Duration,
    issued_generation: u64,
    applied_generation: u64,
}

impl ScheduleSession {
    pub fn new(client: SolverClient) -> Self {
        Self {
            client,
            demo_data_id: None,
            job_id: None,
            schedule: None,
            controls: SolveControls::new(),
            poll_state: PollState::Idle,
            poll_interval: DEFAULT_POLL_INTERVAL,
            issued_generation: 0,
            applied_generation: 0,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn client(&self) -> &SolverClient {
        &self.client
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    pub fn controls(&self) -> SolveControls {
        self.controls
    }

    pub fn poll_state(&self) -> PollState {
        self.poll_state
    }

    pub fn job_id(&self) -> Option<Uuid> {
        self.job_id
    }

    /// Choose which demo dataset subsequent refreshes load.
    pub fn select_demo_data(&mut self, id: impl Into<String>) {
        self.demo_data_id = Some(id.into());
    }

    /// Resume watching a job submitted elsewhere.
    pub fn attach_job(&mut self, job: Uuid) {
        self.job_id = Some(job);
    }

    fn next_generation(&mut self) -> u64 {
        self.issued_generation += 1;
        self.issued_generation
    }

    /// Apply a fetched schedule unless a newer fetch already landed.
    ///
    /// Returns whether the payload was applied. The solver status of an
    /// applied payload drives the poll state and control visibility.
    fn apply_fetch(&mut self, generation: u64, schedule: Schedule) -> bool {
        if generation <= self.applied_generation {
            tracing::debug!(
                generation,
                applied = self.applied_generation,
                "dropping stale schedule response"
            );
            return false;
        }
        self.applied_generation = generation;
        let solving = schedule.is_solving();
        self.poll_state = if solving {
            PollState::Polling
        } else {
            PollState::Idle
        };
        self.controls.set_solving(solving);
        self.schedule = Some(schedule);
        true
    }

    /// Fetch the current schedule and apply it to the session.
    ///
    /// Loads the active job when one exists, otherwise the selected demo
    /// dataset. Any fetch failure reverts the session to the not-solving
    /// state before the error propagates.
    pub async fn refresh(&mut self) -> Result<bool> {
        let generation = self.next_generation();
        let fetched = match (self.job_id, self.demo_data_id.as_deref()) {
            (Some(job), _) => self.client.schedule(job).await,
            (None, Some(id)) => self.client.demo_data(id).await,
            (None, None) => {
                return Err(CoreError::Custom("no demo dataset selected".to_string()))
            }
        };
        match fetched {
            Ok(schedule) => Ok(self.apply_fetch(generation, schedule)),
            Err(e) => {
                self.poll_state = PollState::Idle;
                self.controls.set_solving(false);
                Err(e.into())
            }
        }
    }

    /// Submit the loaded schedule for solving.
    pub async fn solve(&mut self) -> Result<Uuid> {
        let schedule = self
            .schedule
            .clone()
            .ok_or_else(|| CoreError::Custom("no schedule loaded".to_string()))?;
        match self.client.solve(&schedule).await {
            Ok(job) => {
                tracing::info!(%job, "solving started");
                self.job_id = Some(job);
                self.poll_state = PollState::Polling;
                self.controls.set_solving(true);
                Ok(job)
            }
            Err(e) => {
                self.poll_state = PollState::Idle;
                self.controls.set_solving(false);
                Err(e.into())
            }
        }
    }

    /// Stop the active solve job and reload its final state.
    pub async fn stop_solving(&mut self) -> Result<()> {
        let job = self
            .job_id
            .ok_or_else(|| CoreError::Custom("no active solve job".to_string()))?;
        self.client.stop_solving(job).await?;
        tracing::info!(%job, "solving stopped");
        self.poll_state = PollState::Idle;
        self.controls.set_solving(false);
        self.refresh().await?;
        Ok(())
    }

    /// Rank the constraint breakdown of the loaded schedule.
    ///
    /// Returns `Ok(None)` when no schedule is loaded or it has no score
    /// yet; analysis before the first solve is a no-op, not an error.
    pub async fn analyze(&self) -> Result<Option<Vec<RankedConstraint>>> {
        let schedule = match &self.schedule {
            Some(s) if s.score.is_some() => s,
            _ => return Ok(None),
        };
        let analysis = self.client.analyze(schedule).await?;
        Ok(Some(rank_constraints(&analysis.constraints)))
    }

    /// Poll the backend until solving stops, invoking `on_update` after
    /// every applied refresh.
    ///
    /// The first refresh happens immediately; later ones follow the
    /// configured interval. A failed refresh ends the watch with the
    /// error after the session has already been reset to not-solving.
    /// `&mut self` keeps at most one watch loop alive per session.
    pub async fn watch<F>(&mut self, mut on_update: F) -> Result<()>
    where
        F: FnMut(&Schedule),
    {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match self.refresh().await {
                Ok(applied) => {
                    if applied {
                        if let Some(schedule) = self.schedule.as_ref() {
                            on_update(schedule);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "schedule refresh failed, stopping watch");
                    return Err(e);
                }
            }
            if self.poll_state == PollState::Idle {
                return Ok(());
            }
        }
    }
}
