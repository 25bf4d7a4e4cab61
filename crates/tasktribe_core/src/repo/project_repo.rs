//! Project and task repository.
//!
//! # Responsibility
//! - Allocate project ids and the global task id sequence.
//! - Resolve tasks only through their owning project.
//! - Gate status writes through the closed `TaskStatus` set.
//!
//! # Invariants
//! - Task ids come from one counter shared by all projects.
//! - Invalid status input never mutates a task.
//! - Assignee existence is checked by the store before `add_task`.

use crate::model::ambassador::AmbassadorId;
use crate::model::project::{Project, ProjectId, Task, TaskId, TaskStatus};
use crate::repo::{RepoError, RepoResult};
use log::{info, warn};

#[derive(Debug)]
pub struct ProjectRepository {
    projects: Vec<Project>,
    next_project_id: ProjectId,
    next_task_id: TaskId,
}

impl Default for ProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_project_id: 1,
            next_task_id: 1,
        }
    }

    /// Creates an empty project with the next sequential id.
    pub fn create_project(&mut self, name: impl Into<String>) -> &Project {
        let id = self.next_project_id;
        self.next_project_id += 1;
        self.projects.push(Project::new(id, name));
        info!("event=project_create module=repo status=ok project_id={id}");
        &self.projects[self.projects.len() - 1]
    }

    pub fn get_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    fn get_project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id == id)
    }

    /// Projects in creation order.
    pub fn list_projects(&self) -> &[Project] {
        &self.projects
    }

    /// Tasks of one project in insertion order, `None` for an unknown project.
    pub fn list_tasks(&self, project_id: ProjectId) -> Option<&[Task]> {
        self.get_project(project_id).map(Project::tasks)
    }

    /// Appends a `NotStarted` task to a project.
    ///
    /// The caller owns assignee validation; see `Roster::add_task`.
    ///
    /// # Errors
    /// - `ProjectNotFound` when `project_id` is unknown. No task id is
    ///   consumed in that case.
    pub(crate) fn add_task(
        &mut self,
        project_id: ProjectId,
        name: impl Into<String>,
        deadline: impl Into<String>,
        assignee: AmbassadorId,
    ) -> RepoResult<&Task> {
        let task_id = self.next_task_id;
        let project = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
            .ok_or(RepoError::ProjectNotFound(project_id))?;

        project.push_task(Task::new(task_id, name, deadline, assignee));
        self.next_task_id += 1;
        info!(
            "event=task_add module=repo status=ok project_id={project_id} task_id={task_id} assignee_id={assignee}"
        );

        let tasks = project.tasks();
        Ok(&tasks[tasks.len() - 1])
    }

    /// Gets a task scoped to its owning project.
    pub fn get_task(&self, project_id: ProjectId, task_id: TaskId) -> Option<&Task> {
        self.get_project(project_id)
            .and_then(|project| project.find_task(task_id))
    }

    /// Updates task status from menu/label input.
    ///
    /// Lookup runs before status parsing, so unknown ids win over bad input.
    ///
    /// # Errors
    /// - `ProjectNotFound` / `TaskNotFound` on unresolved ids.
    /// - `InvalidStatus` when `new_status` is outside the closed set; the
    ///   task keeps its previous status.
    pub fn update_status(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
        new_status: &str,
    ) -> RepoResult<TaskStatus> {
        let task = self.task_mut(project_id, task_id)?;
        let Some(status) = TaskStatus::parse(new_status) else {
            warn!(
                "event=task_status_update module=repo status=rejected project_id={project_id} task_id={task_id}"
            );
            return Err(RepoError::InvalidStatus(new_status.trim().to_string()));
        };
        task.status = status;
        info!(
            "event=task_status_update module=repo status=ok project_id={project_id} task_id={task_id} new_status={}",
            status.menu_number()
        );
        Ok(status)
    }

    /// Sets a task status from an already typed value.
    pub fn set_status(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
        status: TaskStatus,
    ) -> RepoResult<()> {
        self.task_mut(project_id, task_id)?.status = status;
        Ok(())
    }

    fn task_mut(&mut self, project_id: ProjectId, task_id: TaskId) -> RepoResult<&mut Task> {
        self.get_project_mut(project_id)
            .ok_or(RepoError::ProjectNotFound(project_id))?
            .find_task_mut(task_id)
            .ok_or(RepoError::TaskNotFound {
                project_id,
                task_id,
            })
    }

    /// Every `(project, task)` pair in project order, then task order.
    pub fn iter_tasks(&self) -> impl Iterator<Item = (&Project, &Task)> + '_ {
        self.projects
            .iter()
            .flat_map(|project| project.tasks().iter().map(move |task| (project, task)))
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectRepository;
    use crate::repo::RepoError;

    #[test]
    fn add_task_to_unknown_project_does_not_consume_task_id() {
        let mut repo = ProjectRepository::new();
        let err = repo.add_task(9, "orphan", "soon", 1).unwrap_err();
        assert_eq!(err, RepoError::ProjectNotFound(9));

        let project_id = repo.create_project("Launch").id;
        let task = repo.add_task(project_id, "first", "soon", 1).unwrap();
        assert_eq!(task.id, 1);
    }

    #[test]
    fn iter_tasks_walks_projects_then_tasks() {
        let mut repo = ProjectRepository::new();
        let first = repo.create_project("A").id;
        let second = repo.create_project("B").id;
        repo.add_task(second, "b1", "", 1).unwrap();
        repo.add_task(first, "a1", "", 1).unwrap();
        repo.add_task(first, "a2", "", 1).unwrap();

        let order: Vec<(u32, u32)> = repo
            .iter_tasks()
            .map(|(project, task)| (project.id, task.id))
            .collect();
        assert_eq!(order, vec![(1, 2), (1, 3), (2, 1)]);
    }
}
