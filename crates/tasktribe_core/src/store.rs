//! Process-wide roster store.
//!
//! # Responsibility
//! - Own every repository and its id counters as one explicit value.
//! - Host writes that span collections (task assignment, attendance).
//!
//! # Invariants
//! - One `Roster` per process run; tests may build as many as they need.
//! - Attendance appends the participant and bumps the ambassador counter in
//!   the same `&mut self` call, or changes nothing.
//! - Ambassador delete does not cascade into tasks or sessions.

use crate::model::ambassador::{Ambassador, AmbassadorId};
use crate::model::project::{ProjectId, Task, TaskId};
use crate::model::training::SessionId;
use crate::repo::ambassador_repo::AmbassadorRepository;
use crate::repo::project_repo::ProjectRepository;
use crate::repo::training_repo::{TrainingRepository, TRAINING_SESSION_COUNT};
use crate::repo::{RepoError, RepoResult};
use log::{debug, info};

/// Result of a successful attendance call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceOutcome {
    /// Participant appended and counter incremented.
    Recorded,
    /// Pair was already present; nothing changed.
    AlreadyRecorded,
}

/// Places that still point at one ambassador id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbassadorReferences {
    /// `(project_id, task_id)` pairs assigned to the ambassador.
    pub tasks: Vec<(ProjectId, TaskId)>,
    /// Sessions listing the ambassador as participant.
    pub sessions: Vec<SessionId>,
}

impl AmbassadorReferences {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.sessions.is_empty()
    }
}

/// In-memory store for ambassadors, projects and the training schedule.
#[derive(Debug, Default)]
pub struct Roster {
    pub ambassadors: AmbassadorRepository,
    pub projects: ProjectRepository,
    pub training: TrainingRepository,
}

impl Roster {
    /// Creates an empty roster with the default training schedule seeded.
    pub fn new() -> Self {
        Self {
            ambassadors: AmbassadorRepository::new(),
            projects: ProjectRepository::new(),
            training: TrainingRepository::seeded(),
        }
    }

    /// Adds a task to a project, assigned to an active ambassador.
    ///
    /// # Errors
    /// - `ProjectNotFound` when the project is unknown (checked first).
    /// - `AmbassadorNotFound` when the assignee is unknown or deleted.
    pub fn add_task(
        &mut self,
        project_id: ProjectId,
        name: impl Into<String>,
        deadline: impl Into<String>,
        assignee_id: AmbassadorId,
    ) -> RepoResult<&Task> {
        if self.projects.get_project(project_id).is_none() {
            return Err(RepoError::ProjectNotFound(project_id));
        }
        if self.ambassadors.get(assignee_id).is_none() {
            return Err(RepoError::AmbassadorNotFound(assignee_id));
        }
        self.projects
            .add_task(project_id, name, deadline, assignee_id)
    }

    /// Resolves the assignee of a task, tombstoned ambassadors included.
    pub fn task_assignee(&self, task: &Task) -> Option<&Ambassador> {
        self.ambassadors.get_including_deleted(task.assignee)
    }

    /// Marks an ambassador present at a training session.
    ///
    /// # Errors
    /// - `SessionNotFound` when the session id is outside the schedule.
    /// - `AmbassadorNotFound` when the ambassador is unknown or deleted.
    pub fn record_attendance(
        &mut self,
        session_id: SessionId,
        ambassador_id: AmbassadorId,
    ) -> RepoResult<AttendanceOutcome> {
        let session = self
            .training
            .get_session_mut(session_id)
            .ok_or(RepoError::SessionNotFound(session_id))?;
        let ambassador = self
            .ambassadors
            .get_mut(ambassador_id)
            .ok_or(RepoError::AmbassadorNotFound(ambassador_id))?;

        if !session.add_participant(ambassador_id) {
            debug!(
                "event=attendance_record module=store status=duplicate session_id={session_id} ambassador_id={ambassador_id}"
            );
            return Ok(AttendanceOutcome::AlreadyRecorded);
        }
        ambassador.increment_training_sessions();

        info!(
            "event=attendance_record module=store status=ok session_id={session_id} ambassador_id={ambassador_id} attended={}",
            ambassador.training_sessions_attended()
        );
        Ok(AttendanceOutcome::Recorded)
    }

    /// Active ambassadors who attended fewer than every scheduled session.
    pub fn missing_full_attendance(&self) -> Vec<&Ambassador> {
        self.ambassadors
            .list()
            .into_iter()
            .filter(|ambassador| ambassador.training_sessions_attended() < TRAINING_SESSION_COUNT)
            .collect()
    }

    /// Lists tasks and sessions still pointing at an ambassador id.
    ///
    /// Works for deleted ids too, since references survive deletion.
    pub fn ambassador_references(&self, ambassador_id: AmbassadorId) -> AmbassadorReferences {
        let tasks = self
            .projects
            .iter_tasks()
            .filter(|(_, task)| task.assignee == ambassador_id)
            .map(|(project, task)| (project.id, task.id))
            .collect();
        let sessions = self
            .training
            .list_sessions()
            .iter()
            .filter(|session| session.has_participant(ambassador_id))
            .map(|session| session.id)
            .collect();
        AmbassadorReferences { tasks, sessions }
    }
}
