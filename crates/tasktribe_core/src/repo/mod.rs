//! In-memory repositories for roster records.
//!
//! # Responsibility
//! - Own each record collection together with its id counter.
//! - Expose lookups as `Option` and mutations as `RepoResult`.
//!
//! # Invariants
//! - Collections keep insertion order; list reads never reorder.
//! - Id counters only move forward, deletes never rewind them.
//! - Repository APIs return semantic errors, never panic on unknown ids.

use crate::model::ambassador::AmbassadorId;
use crate::model::project::{ProjectId, TaskId};
use crate::model::training::SessionId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod ambassador_repo;
pub mod project_repo;
pub mod training_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Recoverable outcome for any roster lookup or mutation that did not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    AmbassadorNotFound(AmbassadorId),
    ProjectNotFound(ProjectId),
    TaskNotFound {
        project_id: ProjectId,
        task_id: TaskId,
    },
    SessionNotFound(SessionId),
    /// Status input outside the closed set; nothing was changed.
    InvalidStatus(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmbassadorNotFound(id) => write!(f, "ambassador not found: {id}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TaskNotFound {
                project_id,
                task_id,
            } => write!(f, "task {task_id} not found in project {project_id}"),
            Self::SessionNotFound(id) => write!(f, "training session not found: {id}"),
            Self::InvalidStatus(value) => {
                write!(f, "invalid task status `{value}`; no change applied")
            }
        }
    }
}

impl Error for RepoError {}
