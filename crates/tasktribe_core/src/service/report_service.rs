//! Statistics and cross-reference reports.
//!
//! # Responsibility
//! - Compute task completion statistics across all projects.
//! - Answer per-ambassador task queries.
//!
//! # Invariants
//! - Reports are read-only over `Roster`.
//! - Result order follows roster order (ambassador list order, then project
//!   order, then task order).
//! - Completion percentage is undefined for zero tasks instead of dividing
//!   by zero.

use crate::model::ambassador::{Ambassador, AmbassadorId};
use crate::model::project::{Project, Task};
use crate::store::Roster;
use std::fmt::{Display, Formatter};

/// Completed vs total task counts across every project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionStats {
    pub total: usize,
    pub completed: usize,
}

impl CompletionStats {
    /// Completion rate in percent, `None` when there are no tasks.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.completed as f64 * 100.0 / self.total as f64)
    }
}

impl Display for CompletionStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} completed", self.completed, self.total)?;
        if let Some(percentage) = self.percentage() {
            write!(f, " ({percentage:.2}%)")?;
        }
        Ok(())
    }
}

/// Report facade over one roster snapshot.
pub struct ReportService<'roster> {
    roster: &'roster Roster,
}

impl<'roster> ReportService<'roster> {
    pub fn new(roster: &'roster Roster) -> Self {
        Self { roster }
    }

    /// Counts all tasks and completed tasks across every project.
    pub fn task_completion_stats(&self) -> CompletionStats {
        self.roster
            .projects
            .iter_tasks()
            .fold(CompletionStats::default(), |mut stats, (_, task)| {
                stats.total += 1;
                if task.is_completed() {
                    stats.completed += 1;
                }
                stats
            })
    }

    /// Tasks assigned to one ambassador with their owning project.
    ///
    /// Deleted ambassadors still match; their tasks are not reassigned.
    pub fn tasks_for_ambassador(
        &self,
        ambassador_id: AmbassadorId,
    ) -> Vec<(&'roster Project, &'roster Task)> {
        self.roster
            .projects
            .iter_tasks()
            .filter(|(_, task)| task.assignee == ambassador_id)
            .collect()
    }

    /// Active ambassadors without a single completed task.
    pub fn ambassadors_with_zero_completed_tasks(&self) -> Vec<&'roster Ambassador> {
        self.roster
            .ambassadors
            .list()
            .into_iter()
            .filter(|ambassador| self.completed_task_count(ambassador.id) == 0)
            .collect()
    }

    /// Active ambassadors who missed at least one training session.
    pub fn ambassadors_missing_training(&self) -> Vec<&'roster Ambassador> {
        self.roster.missing_full_attendance()
    }

    fn completed_task_count(&self, ambassador_id: AmbassadorId) -> usize {
        self.roster
            .projects
            .iter_tasks()
            .filter(|(_, task)| task.assignee == ambassador_id && task.is_completed())
            .count()
    }
}
