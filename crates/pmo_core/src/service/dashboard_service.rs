//! Dashboard use-case service.
//!
//! # Responsibility
//! - Load the state snapshot and hand it to the pure view transforms.
//! - Import snapshots into the store.
//! - Emit metadata-only diagnostic events for each use case.
//!
//! # Invariants
//! - Views are computed from one loaded snapshot per call.
//! - Service layer remains storage-agnostic.

use crate::model::state::AppState;
use crate::repo::state_repo::{RepoResult, StateRepository};
use crate::view::allocation::{
    compute_load_summaries, unresolved_allocations, LoadSummary, ResourceLoadView,
};
use crate::view::calendar::{calendar_events, CalendarEvent, CalendarWindow};
use crate::view::risk_matrix::{build_risk_matrix, RiskMatrix};
use log::{error, info, warn};
use std::time::Instant;

/// Use-case service over a state repository.
pub struct DashboardService<R: StateRepository> {
    repo: R,
}

impl<R: StateRepository> DashboardService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the current state snapshot.
    pub fn load_state(&self) -> RepoResult<AppState> {
        self.repo.load_state().map_err(|err| {
            error!("event=state_load module=service status=error error={err}");
            err
        })
    }

    /// Computes per-resource load from stored state.
    pub fn resource_loads(&self) -> RepoResult<Vec<LoadSummary>> {
        Ok(self.resource_load_view()?.summaries)
    }

    /// Loads the resources once and computes their load from that snapshot.
    ///
    /// Unresolved allocation references are logged and otherwise ignored.
    pub fn resource_load_view(&self) -> RepoResult<ResourceLoadView> {
        let started_at = Instant::now();
        let state = self.load_state()?;

        let unresolved = unresolved_allocations(&state.resources, &state.projects);
        if !unresolved.is_empty() {
            warn!(
                "event=resource_loads module=service status=degraded unresolved_allocations={}",
                unresolved.len()
            );
        }

        let summaries = compute_load_summaries(&state.resources, &state.projects);
        info!(
            "event=resource_loads module=service status=ok resources={} projects={} duration_ms={}",
            state.resources.len(),
            state.projects.len(),
            started_at.elapsed().as_millis()
        );
        Ok(ResourceLoadView {
            resources: state.resources,
            summaries,
        })
    }

    /// Builds the risk heat map from stored risks.
    pub fn risk_matrix(&self) -> RepoResult<RiskMatrix> {
        let risks = self.repo.list_risks()?;
        let matrix = build_risk_matrix(&risks);
        if matrix.skipped > 0 {
            warn!(
                "event=risk_matrix module=service status=degraded skipped={}",
                matrix.skipped
            );
        }
        info!(
            "event=risk_matrix module=service status=ok risks={} placed={}",
            risks.len(),
            matrix.placed()
        );
        Ok(matrix)
    }

    /// Lists project calendar events overlapping `window`.
    pub fn calendar(&self, window: CalendarWindow) -> RepoResult<Vec<CalendarEvent>> {
        let projects = self.repo.list_projects()?;
        let events = calendar_events(&projects, window);
        info!(
            "event=calendar module=service status=ok from={} to={} events={}",
            window.from,
            window.to,
            events.len()
        );
        Ok(events)
    }

    /// Replaces stored state with `snapshot`.
    ///
    /// Validation or storage failures leave the previous state untouched.
    pub fn import_snapshot(&self, snapshot: &AppState) -> RepoResult<()> {
        match self.repo.replace_state(snapshot) {
            Ok(()) => {
                info!(
                    "event=state_import module=service status=ok resources={} projects={} risks={}",
                    snapshot.resources.len(),
                    snapshot.projects.len(),
                    snapshot.risks.len()
                );
                Ok(())
            }
            Err(err) => {
                error!("event=state_import module=service status=error error={err}");
                Err(err)
            }
        }
    }
}
