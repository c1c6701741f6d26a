use crate::{Priority, ProjectColor, ProjectIcon, ProjectPatch, Status, TaskDraft, TaskPatch};

use chrono::NaiveDate;
use serde_json::json;

#[test]
fn test_status_patch_writes_exactly_one_field() {
    let fields = TaskPatch::status_only(Status::Done).to_fields().unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["status"], json!("done"));
}

#[test]
fn test_archived_patch_writes_exactly_one_field() {
    let fields = TaskPatch::archived(true).to_fields().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["isArchived"], json!(true));

    let fields = TaskPatch::archived(false).to_fields().unwrap();
    assert_eq!(fields["isArchived"], json!(false));
}

#[test]
fn test_empty_patch_writes_nothing() {
    let fields = TaskPatch::default().to_fields().unwrap();
    assert!(fields.is_empty());
}

#[test]
fn test_edit_patch_uses_document_field_names() {
    let patch = TaskPatch {
        title: Some("Renamed".to_string()),
        project_id: Some("atlas".to_string()),
        updated_by: Some("Sam".to_string()),
        ..TaskPatch::default()
    };
    let fields = patch.to_fields().unwrap();

    assert_eq!(fields["title"], json!("Renamed"));
    assert_eq!(fields["projectId"], json!("atlas"));
    assert_eq!(fields["updatedBy"], json!("Sam"));
    assert!(!fields.contains_key("status"));
}

#[test]
fn test_edit_patch_writes_full_mutable_set() {
    let draft = TaskDraft {
        title: "Ship the importer".to_string(),
        description: Some("Blocked on review".to_string()),
        notes: None,
        status: Status::InProgress,
        priority: Priority::High,
        project_id: "atlas".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 14),
    };
    let fields = TaskPatch::edit(&draft).to_fields().unwrap();

    assert_eq!(fields["title"], json!("Ship the importer"));
    assert_eq!(fields["description"], json!("Blocked on review"));
    assert_eq!(fields["notes"], json!(""));
    assert_eq!(fields["status"], json!("in-progress"));
    assert_eq!(fields["priority"], json!("high"));
    assert_eq!(fields["projectId"], json!("atlas"));
    assert_eq!(fields["date"], json!("2026-03-14"));
    assert!(!fields.contains_key("isArchived"));
    assert!(!fields.contains_key("updatedBy"));
}

#[test]
fn test_edit_patch_clears_absent_date_with_null() {
    let draft = TaskDraft {
        title: "Undated".to_string(),
        project_id: "atlas".to_string(),
        ..TaskDraft::default()
    };
    let fields = TaskPatch::edit(&draft).to_fields().unwrap();

    assert!(fields.contains_key("date"));
    assert_eq!(fields["date"], json!(null));
}

#[test]
fn test_project_patch_edit() {
    let fields = ProjectPatch::edit("Atlas", ProjectColor::Sky, ProjectIcon::Cloud)
        .to_fields()
        .unwrap();

    assert_eq!(fields.len(), 3);
    assert_eq!(fields["name"], json!("Atlas"));
    assert_eq!(fields["color"], json!("sky"));
    assert_eq!(fields["icon"], json!("Cloud"));
}
