//! Core logic for the PMO dashboard.
//! Derives resource load, risk heat map and calendar views from an explicit
//! state snapshot, and keeps that snapshot in a local SQLite store.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingStatus};
pub use model::project::{Allocation, Project, ProjectId, ProjectStatus};
pub use model::resource::{Resource, ResourceId};
pub use model::risk::{Risk, RiskStatus};
pub use model::state::AppState;
pub use model::validation::ValidationError;
pub use repo::state_repo::{RepoError, RepoResult, SqliteStateRepository, StateRepository};
pub use service::dashboard_service::DashboardService;
pub use view::allocation::{
    compute_load_summaries, unresolved_allocations, LoadBand, LoadSummary, ResourceLoadView,
    UnresolvedAllocation, CRITICAL_THRESHOLD_PERCENT, WARNING_THRESHOLD_PERCENT,
};
pub use view::calendar::{calendar_events, CalendarEvent, CalendarWindow};
pub use view::risk_matrix::{
    build_risk_matrix, RiskCell, RiskMatrix, RiskSeverity, HIGH_SEVERITY_SCORE,
    MEDIUM_SEVERITY_SCORE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
