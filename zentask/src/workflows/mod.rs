//! AI orchestration workflows
//!
//! Free functions in the submodules perform the individual round trips;
//! [`Workflows`] bundles them behind per-workflow single-flight guards so
//! an invocation that is still in flight rejects the next one instead of
//! relying on UI-disabled-state conventions.

// Refinement and suggestion pass-throughs
pub mod assist;

// Spoken daily briefing
pub mod briefing;

// Sub-task decomposition
pub mod decompose;

// Single-flight permit
pub mod guard;

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;
use uuid::Uuid;
use zentask_ai::GenerativeBackend;

use crate::audio::{AudioSink, SAMPLE_RATE_HZ};
use crate::models::Task;
use crate::store::TaskStore;

pub use assist::Suggestion;
pub use guard::{FlightGuard, FlightPermit};

/// Rejection of an invocation whose predecessor is still in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a {0} request is already in flight")]
pub struct Busy(pub &'static str);

/// The four AI workflows, each behind its own single-flight guard
pub struct Workflows {
    backend: Arc<dyn GenerativeBackend>,
    refine_guard: FlightGuard,
    suggest_guard: FlightGuard,
    decompose_guard: FlightGuard,
    briefing_guard: FlightGuard,
}

impl Workflows {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend,
            refine_guard: FlightGuard::new(),
            suggest_guard: FlightGuard::new(),
            decompose_guard: FlightGuard::new(),
            briefing_guard: FlightGuard::new(),
        }
    }

    /// Rewrite a description; the original comes back on any failure
    pub async fn refine(&self, title: &str, description: &str) -> Result<String, Busy> {
        let _permit = self.refine_guard.try_acquire().ok_or(Busy("refine"))?;
        Ok(assist::refine(self.backend.as_ref(), title, description).await)
    }

    /// Suggest category and priority; General/MEDIUM on any failure
    pub async fn suggest(&self, title: &str, description: &str) -> Result<Suggestion, Busy> {
        let _permit = self.suggest_guard.try_acquire().ok_or(Busy("suggest"))?;
        Ok(assist::suggest(self.backend.as_ref(), title, description).await)
    }

    /// Decompose a task and attach the result wholesale
    ///
    /// Returns the updated task; `None` when the id is absent or the
    /// decomposition produced nothing (the task is left untouched).
    /// Re-invoking on a task that already has sub-tasks replaces them.
    pub async fn decompose_task(
        &self,
        store: &mut TaskStore,
        task_id: Uuid,
    ) -> Result<Option<Task>, Busy> {
        let _permit = self
            .decompose_guard
            .try_acquire()
            .ok_or(Busy("decompose"))?;

        let (title, description) = match store.get(task_id) {
            Some(task) => (task.title.clone(), task.description.clone()),
            None => return Ok(None),
        };

        let sub_tasks = decompose::decompose(self.backend.as_ref(), &title, &description).await;
        if sub_tasks.is_empty() {
            return Ok(None);
        }
        Ok(store.set_sub_tasks(task_id, sub_tasks))
    }

    /// Generate and play the daily briefing
    ///
    /// `Ok(true)` when audio played; `Ok(false)` when no briefing could
    /// be produced (the caller shows a generic notice, no retry).
    pub async fn daily_briefing(
        &self,
        sink: &dyn AudioSink,
        tasks: &[Task],
    ) -> Result<bool, Busy> {
        let _permit = self.briefing_guard.try_acquire().ok_or(Busy("briefing"))?;

        let Some(samples) = briefing::generate_briefing(self.backend.as_ref(), tasks).await else {
            return Ok(false);
        };
        match sink.play(&samples, SAMPLE_RATE_HZ) {
            Ok(()) => Ok(true),
            Err(err) => {
                warn!(%err, "briefing playback failed");
                Ok(false)
            }
        }
    }

    pub fn is_refining(&self) -> bool {
        self.refine_guard.is_in_flight()
    }

    pub fn is_suggesting(&self) -> bool {
        self.suggest_guard.is_in_flight()
    }

    pub fn is_decomposing(&self) -> bool {
        self.decompose_guard.is_in_flight()
    }

    pub fn is_briefing(&self) -> bool {
        self.briefing_guard.is_in_flight()
    }
}
