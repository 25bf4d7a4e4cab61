//! Training session domain model.
//!
//! # Invariants
//! - Participant ids are unique and keep insertion order.
//! - Participants are never removed.

use crate::model::ambassador::AmbassadorId;
use std::fmt::{Display, Formatter};

pub type SessionId = u32;

/// One of the fixed onboarding events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSession {
    pub id: SessionId,
    pub date: String,
    pub topic: String,
    participants: Vec<AmbassadorId>,
}

impl TrainingSession {
    pub fn new(id: SessionId, date: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            id,
            date: date.into(),
            topic: topic.into(),
            participants: Vec::new(),
        }
    }

    /// Participant ids in the order attendance was recorded.
    pub fn participants(&self) -> &[AmbassadorId] {
        &self.participants
    }

    pub fn has_participant(&self, ambassador_id: AmbassadorId) -> bool {
        self.participants.contains(&ambassador_id)
    }

    /// Appends a participant. Returns `false` when already present.
    pub(crate) fn add_participant(&mut self, ambassador_id: AmbassadorId) -> bool {
        if self.has_participant(ambassador_id) {
            return false;
        }
        self.participants.push(ambassador_id);
        true
    }
}

impl Display for TrainingSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Session {} - Date: {}, Topic: {}, Number of participants: {}",
            self.id,
            self.date,
            self.topic,
            self.participants.len()
        )
    }
}
