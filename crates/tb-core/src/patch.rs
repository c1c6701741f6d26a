use crate::draft::TaskDraft;
use crate::models::Fields;
use crate::models::priority::Priority;
use crate::models::project_color::ProjectColor;
use crate::models::project_icon::ProjectIcon;
use crate::models::status::Status;
use crate::Result;

use chrono::NaiveDate;
use serde::Serialize;

/// Partial update for a task document.
///
/// Only present fields are written; absent fields are left untouched by the
/// store. A drag therefore serializes to exactly `{"status": ...}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Outer `None` leaves the stored date alone; `Some(None)` writes an
    /// explicit null, clearing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by_avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by_id: Option<String>,
}

impl TaskPatch {
    /// Patch that moves a task to another column and changes nothing else
    pub fn status_only(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Patch that archives or restores a task
    pub fn archived(is_archived: bool) -> Self {
        Self {
            is_archived: Some(is_archived),
            ..Self::default()
        }
    }

    /// Full mutable field set, as written by the task editor. Cleared text
    /// fields are stored as empty strings; a cleared date becomes null.
    pub fn edit(draft: &TaskDraft) -> Self {
        Self {
            title: Some(draft.title.clone()),
            description: Some(draft.description.clone().unwrap_or_default()),
            notes: Some(draft.notes.clone().unwrap_or_default()),
            status: Some(draft.status),
            priority: Some(draft.priority),
            project_id: Some(draft.project_id.clone()),
            date: Some(draft.date),
            is_archived: None,
            updated_by: None,
            updated_by_avatar: None,
            updated_by_id: None,
        }
    }

    pub fn to_fields(&self) -> Result<Fields> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Partial update for a project document
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ProjectColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<ProjectIcon>,
}

impl ProjectPatch {
    /// Full mutable field set, as written by the project editor
    pub fn edit(name: impl Into<String>, color: ProjectColor, icon: ProjectIcon) -> Self {
        Self {
            name: Some(name.into()),
            color: Some(color),
            icon: Some(icon),
        }
    }

    pub fn to_fields(&self) -> Result<Fields> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::from_value(value)?)
    }
}
