//! Project and task domain model.
//!
//! # Responsibility
//! - Define projects as ordered containers of tasks.
//! - Define the closed task status set and its text forms.
//!
//! # Invariants
//! - Tasks are append-only and keep insertion order.
//! - A task never moves to another project.
//! - `TaskStatus` has exactly three values; unknown input never maps to one.

use crate::model::ambassador::AmbassadorId;
use std::fmt::{Display, Formatter};

pub type ProjectId = u32;

/// Task id drawn from one counter shared by every project.
pub type TaskId = u32;

/// Task lifecycle state. Any state may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    /// Human-readable label used by menus and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Menu number for this status (1-based, matches `ALL` order).
    pub fn menu_number(self) -> u8 {
        match self {
            Self::NotStarted => 1,
            Self::InProgress => 2,
            Self::Completed => 3,
        }
    }

    /// Parses a status from a menu number or a label.
    ///
    /// Labels compare case-insensitively and ignore surrounding whitespace.
    /// Returns `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim();
        Self::ALL.into_iter().find(|status| {
            normalized == status.menu_number().to_string()
                || normalized.eq_ignore_ascii_case(status.as_str())
        })
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of work owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    /// Free text, not validated as a date.
    pub deadline: String,
    pub status: TaskStatus,
    /// Set at creation and never reassigned.
    pub assignee: AmbassadorId,
}

impl Task {
    /// Creates a task in `NotStarted` state.
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        deadline: impl Into<String>,
        assignee: AmbassadorId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            deadline: deadline.into(),
            status: TaskStatus::NotStarted,
            assignee,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// Named container of tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    tasks: Vec<Task>,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub(crate) fn find_task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == task_id)
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Project ID: {}, Name: {}, Number of tasks: {}",
            self.id,
            self.name,
            self.tasks.len()
        )
    }
}
