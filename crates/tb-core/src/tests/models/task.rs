use crate::{Priority, Status, Task, TaskDraft};

use chrono::{NaiveDate, Utc};
use serde_json::json;

fn fields_from(value: serde_json::Value) -> crate::Fields {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_task_from_draft() {
    let now = Utc::now();
    let draft = TaskDraft {
        title: "Wire up CI".to_string(),
        description: Some("GitHub Actions".to_string()),
        notes: None,
        status: Status::Todo,
        priority: Priority::High,
        project_id: "harbor-backend".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 9, 1),
    };
    let task = Task::from_draft(draft, "user-1", Some("https://avatar/u1".to_string()), now);

    assert_eq!(task.id, "");
    assert_eq!(task.title, "Wire up CI");
    assert_eq!(task.status, Status::Todo);
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.project_id, "harbor-backend");
    assert_eq!(task.user_id, "user-1");
    assert_eq!(task.assignee.as_deref(), Some("https://avatar/u1"));
    assert_eq!(task.created_at, Some(now));
    assert!(!task.is_archived);
    assert_eq!(task.updated_by, None);
}

#[test]
fn test_task_from_fields_minimal_document() {
    let fields = fields_from(json!({
        "title": "Sparse card"
    }));
    let task = Task::from_fields("t1", &fields).unwrap();

    assert_eq!(task.id, "t1");
    assert_eq!(task.title, "Sparse card");
    assert_eq!(task.status, Status::Backlog);
    assert_eq!(task.priority, Priority::Medium);
    assert!(!task.is_archived);
    assert_eq!(task.date, None);
    assert_eq!(task.user_id, "");
}

#[test]
fn test_task_from_fields_full_document() {
    let fields = fields_from(json!({
        "title": "Observability stack",
        "description": "Prometheus and friends",
        "status": "in-progress",
        "priority": "critical",
        "projectId": "atlas",
        "isArchived": true,
        "date": "2026-08-01",
        "userId": "user-9",
        "assignee": "https://avatar/u9",
        "updatedBy": "Sam",
        "updatedById": "user-2"
    }));
    let task = Task::from_fields("t2", &fields).unwrap();

    assert_eq!(task.status, Status::InProgress);
    assert_eq!(task.priority, Priority::Critical);
    assert_eq!(task.project_id, "atlas");
    assert!(task.is_archived);
    assert_eq!(task.date, NaiveDate::from_ymd_opt(2026, 8, 1));
    assert_eq!(task.updated_by.as_deref(), Some("Sam"));
    assert_eq!(task.updated_by_id.as_deref(), Some("user-2"));
}

#[test]
fn test_task_from_fields_rejects_wrong_types() {
    let fields = fields_from(json!({
        "title": "Broken",
        "status": 42
    }));
    let err = Task::from_fields("t3", &fields).unwrap_err();
    assert!(err.to_string().contains("t3"));

    let fields = fields_from(json!({
        "title": "Broken",
        "status": "review"
    }));
    assert!(Task::from_fields("t4", &fields).is_err());
}

#[test]
fn test_task_to_fields_uses_document_shape() {
    let mut task = Task::from_draft(
        TaskDraft {
            title: "Ship it".to_string(),
            project_id: "atlas".to_string(),
            ..TaskDraft::default()
        },
        "user-1",
        None,
        Utc::now(),
    );
    task.id = "t5".to_string();

    let fields = task.to_fields().unwrap();
    assert!(!fields.contains_key("id"));
    assert_eq!(fields["projectId"], json!("atlas"));
    assert_eq!(fields["isArchived"], json!(false));
    assert_eq!(fields["status"], json!("backlog"));
    assert_eq!(fields["userId"], json!("user-1"));
    // Absent optionals are omitted, not written as null
    assert!(!fields.contains_key("description"));
    assert!(!fields.contains_key("updatedBy"));
}

#[test]
fn test_task_age_days() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let mut task = Task {
        date: NaiveDate::from_ymd_opt(2026, 8, 10),
        ..Task::default()
    };
    assert_eq!(task.age_days(today), Some(15));

    task.date = None;
    assert_eq!(task.age_days(today), None);
}
