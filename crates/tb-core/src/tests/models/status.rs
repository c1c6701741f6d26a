use crate::Status;

use std::str::FromStr;

#[test]
fn test_status_as_str() {
    assert_eq!(Status::Backlog.as_str(), "backlog");
    assert_eq!(Status::Todo.as_str(), "todo");
    assert_eq!(Status::InProgress.as_str(), "in-progress");
    assert_eq!(Status::Done.as_str(), "done");
}

#[test]
fn test_status_from_str() {
    assert_eq!(Status::from_str("backlog").unwrap(), Status::Backlog);
    assert_eq!(Status::from_str("todo").unwrap(), Status::Todo);
    assert_eq!(Status::from_str("in-progress").unwrap(), Status::InProgress);
    assert_eq!(Status::from_str("done").unwrap(), Status::Done);
    assert!(Status::from_str("in_progress").is_err());
    assert!(Status::from_str("review").is_err());
}

#[test]
fn test_status_default() {
    assert_eq!(Status::default(), Status::Backlog);
}

#[test]
fn test_status_column_order() {
    assert_eq!(
        Status::ALL,
        [
            Status::Backlog,
            Status::Todo,
            Status::InProgress,
            Status::Done
        ]
    );
}

#[test]
fn test_status_wire_format() {
    let value = serde_json::to_value(Status::InProgress).unwrap();
    assert_eq!(value, serde_json::json!("in-progress"));

    let parsed: Status = serde_json::from_value(serde_json::json!("done")).unwrap();
    assert_eq!(parsed, Status::Done);
}

#[test]
fn test_status_column_labels() {
    assert_eq!(Status::Backlog.column_label(), "Backlog");
    assert_eq!(Status::Todo.column_label(), "To Do");
    assert_eq!(Status::InProgress.column_label(), "In Progress");
    assert_eq!(Status::Done.column_label(), "Done");
}
