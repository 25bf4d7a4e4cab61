//! Core domain logic for the TaskTribe ambassador manager.
//! This crate owns every roster invariant; the CLI only renders outcomes.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::ambassador::{Ambassador, AmbassadorId, SUGGESTED_ROLES};
pub use model::project::{Project, ProjectId, Task, TaskId, TaskStatus};
pub use model::training::{SessionId, TrainingSession};
pub use repo::training_repo::TRAINING_SESSION_COUNT;
pub use repo::{RepoError, RepoResult};
pub use service::report_service::{CompletionStats, ReportService};
pub use store::{AmbassadorReferences, AttendanceOutcome, Roster};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
