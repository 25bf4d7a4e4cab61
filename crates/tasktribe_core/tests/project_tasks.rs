use tasktribe_core::{RepoError, Roster, TaskStatus};

fn roster_with_lead() -> (Roster, u32) {
    let mut roster = Roster::new();
    let id = roster.ambassadors.add("Alice", "Project Lead").id;
    (roster, id)
}

#[test]
fn create_project_assigns_sequential_ids_with_no_tasks() {
    let mut roster = Roster::new();
    let launch = roster.projects.create_project("Launch").id;
    let outreach = roster.projects.create_project("Outreach").id;

    assert_eq!((launch, outreach), (1, 2));
    assert!(roster.projects.list_tasks(launch).unwrap().is_empty());
    let names: Vec<&str> = roster
        .projects
        .list_projects()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Launch", "Outreach"]);
}

#[test]
fn add_task_uses_global_counter_across_projects() {
    let (mut roster, alice) = roster_with_lead();
    let launch = roster.projects.create_project("Launch").id;
    let outreach = roster.projects.create_project("Outreach").id;

    let first = roster.add_task(launch, "Write copy", "12/30/2025", alice).unwrap().id;
    let second = roster.add_task(outreach, "Post", "01/05/2026", alice).unwrap().id;
    let third = roster.add_task(launch, "Review", "01/10/2026", alice).unwrap().id;

    assert_eq!((first, second, third), (1, 2, 3));
    let launch_ids: Vec<u32> = roster
        .projects
        .list_tasks(launch)
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(launch_ids, vec![1, 3]);
}

#[test]
fn add_task_reports_missing_project_before_missing_ambassador() {
    let mut roster = Roster::new();
    assert_eq!(
        roster.add_task(5, "x", "y", 9).unwrap_err(),
        RepoError::ProjectNotFound(5)
    );

    let project = roster.projects.create_project("Launch").id;
    assert_eq!(
        roster.add_task(project, "x", "y", 9).unwrap_err(),
        RepoError::AmbassadorNotFound(9)
    );
    assert!(roster.projects.list_tasks(project).unwrap().is_empty());
}

#[test]
fn add_task_rejects_deleted_assignee() {
    let (mut roster, alice) = roster_with_lead();
    let project = roster.projects.create_project("Launch").id;
    roster.ambassadors.delete(alice).unwrap();

    assert_eq!(
        roster.add_task(project, "x", "y", alice).unwrap_err(),
        RepoError::AmbassadorNotFound(alice)
    );
}

#[test]
fn new_task_defaults_to_not_started_and_keeps_fields() {
    let (mut roster, alice) = roster_with_lead();
    let project = roster.projects.create_project("Launch").id;
    let task = roster.add_task(project, "Write copy", "12/30/2025", alice).unwrap();

    assert_eq!(task.name, "Write copy");
    assert_eq!(task.deadline, "12/30/2025");
    assert_eq!(task.status, TaskStatus::NotStarted);
    assert_eq!(task.assignee, alice);
}

#[test]
fn get_task_is_scoped_to_its_project() {
    let (mut roster, alice) = roster_with_lead();
    let launch = roster.projects.create_project("Launch").id;
    let outreach = roster.projects.create_project("Outreach").id;
    let task_id = roster.add_task(launch, "Write copy", "", alice).unwrap().id;

    assert!(roster.projects.get_task(launch, task_id).is_some());
    assert!(roster.projects.get_task(outreach, task_id).is_none());
    assert!(roster.projects.get_task(99, task_id).is_none());
}

#[test]
fn update_status_moves_freely_between_states() {
    let (mut roster, alice) = roster_with_lead();
    let project = roster.projects.create_project("Launch").id;
    let task_id = roster.add_task(project, "Write copy", "", alice).unwrap().id;

    assert_eq!(
        roster.projects.update_status(project, task_id, "3").unwrap(),
        TaskStatus::Completed
    );
    assert_eq!(
        roster.projects.update_status(project, task_id, "Not Started").unwrap(),
        TaskStatus::NotStarted
    );
    roster
        .projects
        .set_status(project, task_id, TaskStatus::InProgress)
        .unwrap();
    assert_eq!(
        roster.projects.get_task(project, task_id).unwrap().status,
        TaskStatus::InProgress
    );
}

#[test]
fn update_status_with_invalid_value_keeps_previous_status() {
    let (mut roster, alice) = roster_with_lead();
    let project = roster.projects.create_project("Launch").id;
    let task_id = roster.add_task(project, "Write copy", "", alice).unwrap().id;
    roster.projects.update_status(project, task_id, "2").unwrap();

    let err = roster.projects.update_status(project, task_id, "4").unwrap_err();
    assert_eq!(err, RepoError::InvalidStatus("4".to_string()));
    assert_eq!(
        roster.projects.get_task(project, task_id).unwrap().status,
        TaskStatus::InProgress
    );
}

#[test]
fn update_status_reports_unknown_project_and_task() {
    let (mut roster, alice) = roster_with_lead();
    let project = roster.projects.create_project("Launch").id;
    roster.add_task(project, "Write copy", "", alice).unwrap();

    assert_eq!(
        roster.projects.update_status(7, 1, "1").unwrap_err(),
        RepoError::ProjectNotFound(7)
    );
    assert_eq!(
        roster.projects.update_status(project, 8, "1").unwrap_err(),
        RepoError::TaskNotFound {
            project_id: project,
            task_id: 8
        }
    );
    assert!(roster.projects.list_tasks(7).is_none());
}
