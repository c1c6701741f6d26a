use crate::{Staleness, Status, Task};

use chrono::NaiveDate;

fn dated_task(status: Status, date: Option<&str>) -> Task {
    Task {
        title: "Aging card".to_string(),
        status,
        date: date.map(|d| d.parse().unwrap()),
        ..Task::default()
    }
}

#[test]
fn test_staleness_classify_boundaries() {
    assert_eq!(Staleness::classify(0), Staleness::Normal);
    assert_eq!(Staleness::classify(14), Staleness::Normal);
    assert_eq!(Staleness::classify(15), Staleness::Warning);
    assert_eq!(Staleness::classify(30), Staleness::Warning);
    assert_eq!(Staleness::classify(31), Staleness::Critical);
}

#[test]
fn test_staleness_future_dates_are_normal() {
    assert_eq!(Staleness::classify(-3), Staleness::Normal);
}

#[test]
fn test_done_tasks_never_stale() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let task = dated_task(Status::Done, Some("2025-01-01"));
    assert_eq!(task.staleness(today), Staleness::Normal);
}

#[test]
fn test_undated_tasks_are_normal() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let task = dated_task(Status::InProgress, None);
    assert_eq!(task.staleness(today), Staleness::Normal);
}

#[test]
fn test_old_unfinished_tasks_go_stale() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();

    let warning = dated_task(Status::Todo, Some("2026-08-05"));
    assert_eq!(warning.staleness(today), Staleness::Warning);

    let critical = dated_task(Status::Todo, Some("2026-07-01"));
    assert_eq!(critical.staleness(today), Staleness::Critical);
}
