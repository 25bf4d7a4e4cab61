use tasktribe_core::{CompletionStats, ReportService, Roster, TaskStatus};

#[test]
fn stats_on_empty_roster_have_no_percentage() {
    let roster = Roster::new();
    let stats = ReportService::new(&roster).task_completion_stats();
    assert_eq!(
        stats,
        CompletionStats {
            total: 0,
            completed: 0
        }
    );
    assert_eq!(stats.percentage(), None);
}

#[test]
fn single_completed_task_reports_full_completion() {
    let mut roster = Roster::new();
    let alice = roster.ambassadors.add("Alice", "Project Lead").id;
    let launch = roster.projects.create_project("Launch").id;
    let task = roster.add_task(launch, "Write copy", "12/30/2025", alice).unwrap();
    assert_eq!((alice, launch, task.id), (1, 1, 1));
    assert_eq!(task.status, TaskStatus::NotStarted);

    roster
        .projects
        .update_status(launch, 1, TaskStatus::Completed.as_str())
        .unwrap();

    let stats = ReportService::new(&roster).task_completion_stats();
    assert_eq!((stats.total, stats.completed), (1, 1));
    assert_eq!(stats.percentage(), Some(100.0));
    assert_eq!(format!("{:.2}", stats.percentage().unwrap()), "100.00");
}

#[test]
fn stats_span_every_project() {
    let mut roster = Roster::new();
    let alice = roster.ambassadors.add("Alice", "Project Lead").id;
    let launch = roster.projects.create_project("Launch").id;
    let outreach = roster.projects.create_project("Outreach").id;
    roster.add_task(launch, "a", "", alice).unwrap();
    roster.add_task(outreach, "b", "", alice).unwrap();
    roster.add_task(outreach, "c", "", alice).unwrap();
    roster.projects.update_status(outreach, 3, "3").unwrap();

    let stats = ReportService::new(&roster).task_completion_stats();
    assert_eq!((stats.total, stats.completed), (3, 1));
    assert_eq!(format!("{:.2}", stats.percentage().unwrap()), "33.33");
}

#[test]
fn tasks_for_ambassador_keep_project_then_task_order() {
    let mut roster = Roster::new();
    let alice = roster.ambassadors.add("Alice", "Project Lead").id;
    let bao = roster.ambassadors.add("Bao", "Content Creator").id;
    let launch = roster.projects.create_project("Launch").id;
    let outreach = roster.projects.create_project("Outreach").id;
    roster.add_task(outreach, "post", "", alice).unwrap();
    roster.add_task(launch, "copy", "", alice).unwrap();
    roster.add_task(launch, "design", "", bao).unwrap();
    roster.add_task(launch, "review", "", alice).unwrap();

    let report = ReportService::new(&roster);
    let pairs: Vec<(&str, &str)> = report
        .tasks_for_ambassador(alice)
        .into_iter()
        .map(|(project, task)| (project.name.as_str(), task.name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("Launch", "copy"), ("Launch", "review"), ("Outreach", "post")]
    );
    assert!(report.tasks_for_ambassador(99).is_empty());
}

#[test]
fn in_progress_only_ambassador_has_zero_completed_tasks() {
    let mut roster = Roster::new();
    let alice = roster.ambassadors.add("Alice", "Project Lead").id;
    let bao = roster.ambassadors.add("Bao", "Content Creator").id;
    let launch = roster.projects.create_project("Launch").id;
    let alice_task = roster.add_task(launch, "copy", "", alice).unwrap().id;
    let bao_task = roster.add_task(launch, "design", "", bao).unwrap().id;
    roster.projects.update_status(launch, alice_task, "In Progress").unwrap();
    roster.projects.update_status(launch, bao_task, "completed").unwrap();

    let ids: Vec<u32> = ReportService::new(&roster)
        .ambassadors_with_zero_completed_tasks()
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec![alice]);
}

#[test]
fn ambassador_without_tasks_has_zero_completed_tasks() {
    let mut roster = Roster::new();
    roster.ambassadors.add("Alice", "Project Lead");
    roster.ambassadors.add("Bao", "Content Creator");

    let report = ReportService::new(&roster);
    assert_eq!(report.ambassadors_with_zero_completed_tasks().len(), 2);
    assert_eq!(report.ambassadors_missing_training().len(), 2);
}
