//! Interactive text menus over one `Roster`.
//!
//! # Responsibility
//! - Collect line input, call roster operations, print their outcomes.
//! - Re-prompt integer input until it parses.
//!
//! # Invariants
//! - Menus own no domain state beyond the `Roster` they drive.
//! - Domain failures are printed and control returns to the enclosing menu.
//! - End of input behaves like choosing `0` at every level.

use log::debug;
use std::io::{self, BufRead, Write};
use tasktribe_core::{
    AttendanceOutcome, RepoError, ReportService, Roster, Task, TaskStatus, SUGGESTED_ROLES,
    TRAINING_SESSION_COUNT,
};

/// Line-oriented menu driver.
pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
    roster: Roster,
    input_closed: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, roster: Roster) -> Self {
        Self {
            input,
            output,
            roster,
            input_closed: false,
        }
    }

    #[cfg(test)]
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Runs the top-level menu until `0` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "==== TASKTRIBE AMBASSADOR MANAGER ====")?;
            writeln!(self.output, "1. Manage Ambassador")?;
            writeln!(self.output, "2. Manage Projects and Tasks")?;
            writeln!(self.output, "3. Manage 4-Day Training Schedule")?;
            writeln!(self.output, "4. Statistics Report")?;
            writeln!(self.output, "0. Exit")?;
            match self.prompt_integer("Choose: ")? {
                Some(1) => self.ambassador_menu()?,
                Some(2) => self.project_menu()?,
                Some(3) => self.training_menu()?,
                Some(4) => self.report_menu()?,
                Some(0) | None => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                Some(_) => writeln!(self.output, "Invalid choice!")?,
            }
        }
        self.output.flush()
    }

    // ===== input =====

    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.input_closed {
            return Ok(None);
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("event=input_closed module=cli status=ok");
            self.input_closed = true;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_integer(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        while let Some(line) = self.read_line()? {
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    write!(self.output, "Please enter a number: ")?;
                    self.output.flush()?;
                }
            }
        }
        Ok(None)
    }

    /// Prompts for a record id. Out-of-range numbers map to 0, which never
    /// resolves because ids start at 1.
    fn prompt_id(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        Ok(self
            .prompt_integer(prompt)?
            .map(|value| u32::try_from(value).unwrap_or(0)))
    }

    fn submenu(&mut self, title: &str, items: &[&str]) -> io::Result<Option<i64>> {
        writeln!(self.output, "--- {title} ---")?;
        for (index, item) in items.iter().enumerate() {
            writeln!(self.output, "{}. {item}", index + 1)?;
        }
        writeln!(self.output, "0. Back")?;
        self.prompt_integer("Choose: ")
    }

    fn report_error(&mut self, err: &RepoError) -> io::Result<()> {
        let message = match err {
            RepoError::AmbassadorNotFound(_) => "Ambassador not found.".to_string(),
            RepoError::ProjectNotFound(_) => "Project not found.".to_string(),
            RepoError::TaskNotFound { .. } => "Task not found.".to_string(),
            RepoError::SessionNotFound(_) => "Training session not found.".to_string(),
            RepoError::InvalidStatus(_) => {
                "Invalid choice, keeping previous status.".to_string()
            }
        };
        writeln!(self.output, "{message}")
    }

    // ===== ambassadors =====

    fn ambassador_menu(&mut self) -> io::Result<()> {
        let items = [
            "Add ambassador",
            "Edit ambassador information",
            "Delete ambassador",
            "View ambassador list",
        ];
        loop {
            match self.submenu("Ambassador Management", &items)? {
                Some(1) => self.add_ambassador()?,
                Some(2) => self.edit_ambassador()?,
                Some(3) => self.delete_ambassador()?,
                Some(4) => self.print_ambassador_list()?,
                Some(0) | None => return Ok(()),
                Some(_) => writeln!(self.output, "Invalid choice!")?,
            }
        }
    }

    fn add_ambassador(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt_line("Enter name: ")? else {
            return Ok(());
        };
        let role_prompt = format!("Enter role ({}): ", SUGGESTED_ROLES.join(" / "));
        let Some(role) = self.prompt_line(&role_prompt)? else {
            return Ok(());
        };
        let id = self.roster.ambassadors.add(name, role).id;
        writeln!(self.output, "Added ambassador with ID: {id}")
    }

    fn print_ambassador_list(&mut self) -> io::Result<()> {
        let ambassadors = self.roster.ambassadors.list();
        if ambassadors.is_empty() {
            return writeln!(self.output, "No ambassadors yet.");
        }
        writeln!(self.output, "Ambassador list:")?;
        for ambassador in ambassadors {
            writeln!(self.output, "{ambassador}")?;
        }
        Ok(())
    }

    fn edit_ambassador(&mut self) -> io::Result<()> {
        self.print_ambassador_list()?;
        let Some(id) = self.prompt_id("Enter ambassador ID to edit: ")? else {
            return Ok(());
        };
        if self.roster.ambassadors.get(id).is_none() {
            return writeln!(self.output, "Ambassador not found.");
        }
        let Some(name) = self.prompt_line("Enter new name (leave blank to keep current): ")?
        else {
            return Ok(());
        };
        let Some(role) = self.prompt_line("Enter new role (leave blank to keep current): ")?
        else {
            return Ok(());
        };
        let outcome = self
            .roster
            .ambassadors
            .edit(id, Some(name.as_str()), Some(role.as_str()))
            .map(|_| ());
        match outcome {
            Ok(()) => writeln!(self.output, "Information updated."),
            Err(err) => self.report_error(&err),
        }
    }

    fn delete_ambassador(&mut self) -> io::Result<()> {
        self.print_ambassador_list()?;
        let Some(id) = self.prompt_id("Enter ambassador ID to delete: ")? else {
            return Ok(());
        };
        let references = self.roster.ambassador_references(id);
        match self.roster.ambassadors.delete(id) {
            Ok(()) => {
                if !references.is_empty() {
                    writeln!(
                        self.output,
                        "Note: still referenced by {} task(s) and {} training session(s).",
                        references.tasks.len(),
                        references.sessions.len()
                    )?;
                }
                writeln!(self.output, "Ambassador deleted.")
            }
            Err(err) => self.report_error(&err),
        }
    }

    // ===== projects and tasks =====

    fn project_menu(&mut self) -> io::Result<()> {
        let items = [
            "Create new project",
            "View project list",
            "Add task to project",
            "Update task status",
            "View tasks of a project",
            "View tasks by ambassador",
        ];
        loop {
            match self.submenu("Project and Task Management", &items)? {
                Some(1) => self.create_project()?,
                Some(2) => self.print_project_list()?,
                Some(3) => self.add_task()?,
                Some(4) => self.update_task_status()?,
                Some(5) => self.view_tasks_by_project()?,
                Some(6) => self.view_tasks_by_ambassador()?,
                Some(0) | None => return Ok(()),
                Some(_) => writeln!(self.output, "Invalid choice!")?,
            }
        }
    }

    fn create_project(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt_line("Enter project name: ")? else {
            return Ok(());
        };
        let id = self.roster.projects.create_project(name).id;
        writeln!(self.output, "Created project with ID: {id}")
    }

    fn print_project_list(&mut self) -> io::Result<()> {
        let projects = self.roster.projects.list_projects();
        if projects.is_empty() {
            return writeln!(self.output, "No projects yet.");
        }
        writeln!(self.output, "Project list:")?;
        for project in projects {
            writeln!(self.output, "{project}")?;
        }
        Ok(())
    }

    fn task_line(&self, task: &Task) -> String {
        let assignee = self
            .roster
            .task_assignee(task)
            .map(|ambassador| ambassador.name.as_str())
            .unwrap_or("None");
        format!(
            "Task ID: {}, Name: {}, Deadline: {}, Status: {}, Assignee: {}",
            task.id, task.name, task.deadline, task.status, assignee
        )
    }

    /// Prints a project's tasks; returns `false` when it has none.
    fn print_tasks_of(&mut self, project_id: u32) -> io::Result<bool> {
        let lines: Vec<String> = self
            .roster
            .projects
            .list_tasks(project_id)
            .unwrap_or_default()
            .iter()
            .map(|task| self.task_line(task))
            .collect();
        if lines.is_empty() {
            writeln!(self.output, "Project has no tasks yet.")?;
            return Ok(false);
        }
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(true)
    }

    fn add_task(&mut self) -> io::Result<()> {
        self.print_project_list()?;
        let Some(project_id) = self.prompt_id("Enter project ID: ")? else {
            return Ok(());
        };
        if self.roster.projects.get_project(project_id).is_none() {
            return writeln!(self.output, "Project not found.");
        }
        let Some(name) = self.prompt_line("Enter task name: ")? else {
            return Ok(());
        };
        let Some(deadline) = self.prompt_line("Enter deadline (e.g., 12/30/2025): ")? else {
            return Ok(());
        };
        if self.roster.ambassadors.is_empty() {
            return writeln!(
                self.output,
                "No ambassadors yet, please add ambassadors first."
            );
        }
        self.print_ambassador_list()?;
        let Some(assignee_id) = self.prompt_id("Select assignee ambassador ID: ")? else {
            return Ok(());
        };
        let outcome = self
            .roster
            .add_task(project_id, name, deadline, assignee_id)
            .map(|task| task.id);
        match outcome {
            Ok(task_id) => {
                let project_name = self
                    .roster
                    .projects
                    .get_project(project_id)
                    .map(|project| project.name.clone())
                    .unwrap_or_default();
                writeln!(
                    self.output,
                    "Added task with ID: {task_id} to project {project_name}"
                )
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn update_task_status(&mut self) -> io::Result<()> {
        self.print_project_list()?;
        let Some(project_id) = self.prompt_id("Enter project ID containing the task: ")? else {
            return Ok(());
        };
        if self.roster.projects.get_project(project_id).is_none() {
            return writeln!(self.output, "Project not found.");
        }
        if !self.print_tasks_of(project_id)? {
            return Ok(());
        }
        let Some(task_id) = self.prompt_id("Enter task ID to update: ")? else {
            return Ok(());
        };
        if self.roster.projects.get_task(project_id, task_id).is_none() {
            return writeln!(self.output, "Task not found.");
        }

        writeln!(self.output, "Select new status:")?;
        for status in TaskStatus::ALL {
            writeln!(self.output, "{}. {status}", status.menu_number())?;
        }
        let Some(choice) = self.prompt_integer("Choose: ")? else {
            return Ok(());
        };
        match self
            .roster
            .projects
            .update_status(project_id, task_id, &choice.to_string())
        {
            Ok(_) => writeln!(self.output, "Task status updated."),
            Err(err) => self.report_error(&err),
        }
    }

    fn view_tasks_by_project(&mut self) -> io::Result<()> {
        self.print_project_list()?;
        let Some(project_id) = self.prompt_id("Enter project ID: ")? else {
            return Ok(());
        };
        let Some(project_name) = self
            .roster
            .projects
            .get_project(project_id)
            .map(|project| project.name.clone())
        else {
            return writeln!(self.output, "Project not found.");
        };
        if self
            .roster
            .projects
            .list_tasks(project_id)
            .is_some_and(|tasks| !tasks.is_empty())
        {
            writeln!(self.output, "Task list for project {project_name}:")?;
        }
        self.print_tasks_of(project_id)?;
        Ok(())
    }

    fn view_tasks_by_ambassador(&mut self) -> io::Result<()> {
        if self.roster.ambassadors.is_empty() {
            return writeln!(self.output, "No ambassadors yet.");
        }
        self.print_ambassador_list()?;
        let Some(id) = self.prompt_id("Enter ambassador ID: ")? else {
            return Ok(());
        };
        let Some(name) = self
            .roster
            .ambassadors
            .get(id)
            .map(|ambassador| ambassador.name.clone())
        else {
            return writeln!(self.output, "Ambassador not found.");
        };

        let lines: Vec<String> = ReportService::new(&self.roster)
            .tasks_for_ambassador(id)
            .into_iter()
            .map(|(project, task)| format!("[{}] {}", project.name, self.task_line(task)))
            .collect();
        writeln!(self.output, "Task list for {name}:")?;
        if lines.is_empty() {
            return writeln!(self.output, "No tasks assigned to this ambassador yet.");
        }
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    // ===== training =====

    fn training_menu(&mut self) -> io::Result<()> {
        let items = [
            "View training schedule",
            "Mark ambassador attendance for training session",
            "View ambassadors who haven't attended all 4 sessions",
        ];
        loop {
            match self.submenu("4-Day Training Schedule Management", &items)? {
                Some(1) => self.print_training_schedule()?,
                Some(2) => self.mark_attendance()?,
                Some(3) => self.print_missing_training()?,
                Some(0) | None => return Ok(()),
                Some(_) => writeln!(self.output, "Invalid choice!")?,
            }
        }
    }

    fn print_training_schedule(&mut self) -> io::Result<()> {
        writeln!(self.output, "4-day training schedule:")?;
        for session in self.roster.training.list_sessions() {
            writeln!(self.output, "{session}")?;
        }
        Ok(())
    }

    fn mark_attendance(&mut self) -> io::Result<()> {
        if self.roster.ambassadors.is_empty() {
            return writeln!(self.output, "No ambassadors yet, please add first.");
        }
        self.print_training_schedule()?;
        let Some(session_id) = self.prompt_id("Select training session ID: ")? else {
            return Ok(());
        };
        if self.roster.training.get_session(session_id).is_none() {
            return writeln!(self.output, "Training session not found.");
        }
        self.print_ambassador_list()?;
        let Some(ambassador_id) = self.prompt_id("Select participating ambassador ID: ")? else {
            return Ok(());
        };
        match self.roster.record_attendance(session_id, ambassador_id) {
            Ok(AttendanceOutcome::Recorded) => writeln!(self.output, "Attendance recorded."),
            Ok(AttendanceOutcome::AlreadyRecorded) => writeln!(
                self.output,
                "This ambassador has already been recorded as attending this session."
            ),
            Err(err) => self.report_error(&err),
        }
    }

    fn print_missing_training(&mut self) -> io::Result<()> {
        if self.roster.ambassadors.is_empty() {
            return writeln!(self.output, "No ambassadors yet.");
        }
        writeln!(
            self.output,
            "List of ambassadors who haven't attended all {TRAINING_SESSION_COUNT} sessions:"
        )?;
        let lines: Vec<String> = ReportService::new(&self.roster)
            .ambassadors_missing_training()
            .iter()
            .map(|ambassador| ambassador.to_string())
            .collect();
        if lines.is_empty() {
            return writeln!(
                self.output,
                "All ambassadors have attended all {TRAINING_SESSION_COUNT} sessions."
            );
        }
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    // ===== reports =====

    fn report_menu(&mut self) -> io::Result<()> {
        let items = [
            "Statistics of completed tasks / total",
            "List of ambassadors with no completed tasks",
            "List of ambassadors who haven't attended all 4 training sessions",
        ];
        loop {
            match self.submenu("Statistics Report", &items)? {
                Some(1) => self.print_task_statistics()?,
                Some(2) => self.print_without_completed_tasks()?,
                Some(3) => self.print_missing_training()?,
                Some(0) | None => return Ok(()),
                Some(_) => writeln!(self.output, "Invalid choice!")?,
            }
        }
    }

    fn print_task_statistics(&mut self) -> io::Result<()> {
        let stats = ReportService::new(&self.roster).task_completion_stats();
        writeln!(self.output, "Total number of tasks: {}", stats.total)?;
        writeln!(self.output, "Number of completed tasks: {}", stats.completed)?;
        if let Some(percentage) = stats.percentage() {
            writeln!(self.output, "Completion rate: {percentage:.2}%")?;
        }
        Ok(())
    }

    fn print_without_completed_tasks(&mut self) -> io::Result<()> {
        if self.roster.ambassadors.is_empty() {
            return writeln!(self.output, "No ambassadors yet.");
        }
        writeln!(self.output, "List of ambassadors with no completed tasks:")?;
        let lines: Vec<String> = ReportService::new(&self.roster)
            .ambassadors_with_zero_completed_tasks()
            .iter()
            .map(|ambassador| ambassador.to_string())
            .collect();
        if lines.is_empty() {
            return writeln!(
                self.output,
                "All ambassadors have at least one completed task."
            );
        }
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}
