//! Training schedule repository.
//!
//! # Responsibility
//! - Hold the fixed four-day onboarding schedule.
//!
//! # Invariants
//! - The schedule is seeded once on construction; sessions are never added
//!   or removed afterwards.
//! - Participant writes go through `Roster::record_attendance` so the
//!   ambassador counter moves with them.

use crate::model::training::{SessionId, TrainingSession};

/// Number of sessions in the onboarding schedule.
pub const TRAINING_SESSION_COUNT: u32 = 4;

const DEFAULT_SCHEDULE: [(&str, &str); TRAINING_SESSION_COUNT as usize] = [
    ("Day 1", "Introduction to TaskTribe, goal of 1000 users"),
    ("Day 2", "Content creation and social media sharing skills"),
    ("Day 3", "Community skills, building study groups"),
    ("Day 4", "Summary, 90-day action plan"),
];

#[derive(Debug)]
pub struct TrainingRepository {
    sessions: Vec<TrainingSession>,
}

impl Default for TrainingRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TrainingRepository {
    /// Builds the default schedule with ids 1..=4.
    pub fn seeded() -> Self {
        let sessions = DEFAULT_SCHEDULE
            .iter()
            .zip(1..)
            .map(|((date, topic), id)| TrainingSession::new(id, *date, *topic))
            .collect();
        Self { sessions }
    }

    pub fn get_session(&self, id: SessionId) -> Option<&TrainingSession> {
        self.sessions.iter().find(|session| session.id == id)
    }

    pub(crate) fn get_session_mut(&mut self, id: SessionId) -> Option<&mut TrainingSession> {
        self.sessions.iter_mut().find(|session| session.id == id)
    }

    /// Sessions in schedule order.
    pub fn list_sessions(&self) -> &[TrainingSession] {
        &self.sessions
    }
}
