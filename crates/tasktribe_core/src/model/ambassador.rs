//! Ambassador domain model.
//!
//! # Responsibility
//! - Define the roster record for one program participant.
//! - Own the training attendance counter and its single increment path.
//!
//! # Invariants
//! - `id` is assigned by the repository and never changes.
//! - `training_sessions_attended` never decreases.
//! - `is_deleted` is the source of truth for tombstone state.

use std::fmt::{Display, Formatter};

/// Stable identifier for ambassadors, assigned sequentially from 1.
pub type AmbassadorId = u32;

/// Suggested role labels shown by the menu. Roles are free text.
pub const SUGGESTED_ROLES: [&str; 3] = ["Project Lead", "Content Creator", "Community Promoter"];

/// Roster record for one program participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ambassador {
    pub id: AmbassadorId,
    pub name: String,
    pub role: String,
    /// Number of distinct training sessions this ambassador attended.
    training_sessions_attended: u32,
    /// Tombstone kept so tasks and sessions can still resolve the id.
    is_deleted: bool,
}

impl Ambassador {
    /// Creates an active ambassador with zero attended sessions.
    pub fn new(id: AmbassadorId, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            training_sessions_attended: 0,
            is_deleted: false,
        }
    }

    pub fn training_sessions_attended(&self) -> u32 {
        self.training_sessions_attended
    }

    /// Bumps the attendance counter.
    ///
    /// Only the attendance write path calls this, right after appending the
    /// ambassador to a session participant set.
    pub(crate) fn increment_training_sessions(&mut self) {
        self.training_sessions_attended += 1;
    }

    pub(crate) fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    /// Returns whether this ambassador is visible in roster reads.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

impl Display for Ambassador {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Role: {}, Training sessions attended: {}",
            self.id, self.name, self.role, self.training_sessions_attended
        )
    }
}
