//! Backup file payloads for export and import.
//!
//! A backup is a plain JSON array of task records with the document id
//! inline. Import parses the whole file into typed records before anything
//! is deleted, so a malformed file can never cost data.

use crate::models::Fields;
use crate::models::priority::Priority;
use crate::models::status::Status;
use crate::models::task::Task;
use crate::Result;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One task record inside a backup file.
///
/// Unlike the live document form, required workflow fields must be present:
/// a record missing its title, status, priority or project reference fails
/// the import as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupTask {
    /// Original document id; reused on import when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,
    pub status: Status,
    pub priority: Priority,
    pub project_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by_avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by_id: Option<String>,
}

impl BackupTask {
    /// Split into the id to reuse (if any) and the document fields to write
    pub fn into_fields(self) -> Result<(Option<String>, Fields)> {
        let id = self.id.clone();
        let value = serde_json::to_value(&self)?;
        let mut fields: Fields = serde_json::from_value(value)?;
        fields.remove("id");
        Ok((id, fields))
    }
}

impl From<&Task> for BackupTask {
    fn from(task: &Task) -> Self {
        Self {
            id: Some(task.id.clone()),
            title: task.title.clone(),
            status: task.status,
            priority: task.priority,
            project_id: task.project_id.clone(),
            description: task.description.clone(),
            notes: task.notes.clone(),
            is_archived: task.is_archived,
            date: task.date,
            user_id: task.user_id.clone(),
            assignee: task.assignee.clone(),
            created_at: task.created_at,
            updated_by: task.updated_by.clone(),
            updated_by_avatar: task.updated_by_avatar.clone(),
            updated_by_id: task.updated_by_id.clone(),
        }
    }
}

/// Render tasks as a pretty-printed backup file
pub fn export_json(tasks: &[Task]) -> Result<String> {
    let records: Vec<BackupTask> = tasks.iter().map(BackupTask::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Parse a backup file into typed records. Fails on anything that is not
/// a JSON array of well-formed task records.
pub fn parse_backup(json: &str) -> Result<Vec<BackupTask>> {
    Ok(serde_json::from_str(json)?)
}

/// Suggested download name for a backup taken on the given day
pub fn suggested_filename(date: NaiveDate) -> String {
    format!("taskboard-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Outcome of a completed import, by phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Existing documents removed before the restore
    pub deleted: usize,
    /// Backup records written
    pub created: usize,
}
