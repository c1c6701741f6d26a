use crate::draft::TaskDraft;
use crate::models::Fields;
use crate::models::priority::Priority;
use crate::models::staleness::Staleness;
use crate::models::status::Status;
use crate::{CoreError, Result};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A card on the board.
///
/// Field names follow the stored document shape (camelCase). The document id
/// lives outside the field map, so `id` is never part of the serialized form.
/// Documents written by older clients may omit most fields; missing values
/// deserialize to defaults, wrong-typed values reject the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(skip)]
    pub id: String,

    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    // Workflow
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub is_archived: bool,

    /// Target date used for staleness display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    // Ownership
    #[serde(default)]
    pub user_id: String,
    /// Avatar URL of the user the card is assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    // Last-edit attribution, recorded when someone other than the creator saves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by_avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by_id: Option<String>,
}

impl Task {
    /// Assemble a new task from a validated draft.
    /// The id stays empty until the store assigns one.
    pub fn from_draft(
        draft: TaskDraft,
        user_id: impl Into<String>,
        assignee: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: String::new(),
            title: draft.title,
            description: draft.description,
            notes: draft.notes,
            status: draft.status,
            priority: draft.priority,
            project_id: draft.project_id,
            is_archived: false,
            date: draft.date,
            user_id: user_id.into(),
            assignee,
            created_at: Some(created_at),
            updated_by: None,
            updated_by_avatar: None,
            updated_by_id: None,
        }
    }

    /// Decode a stored document into a task
    #[track_caller]
    pub fn from_fields(id: impl Into<String>, fields: &Fields) -> Result<Self> {
        let id = id.into();
        let mut task: Task = serde_json::from_value(serde_json::Value::Object(fields.clone()))
            .map_err(|source| CoreError::Document {
                id: id.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;
        task.id = id;
        Ok(task)
    }

    /// Encode this task as document fields (id excluded)
    pub fn to_fields(&self) -> Result<Fields> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Days elapsed since the task's target date. None when undated.
    pub fn age_days(&self, today: NaiveDate) -> Option<i64> {
        self.date.map(|date| (today - date).num_days())
    }

    /// Age classification for the card badge. Finished and undated
    /// tasks never go stale.
    pub fn staleness(&self, today: NaiveDate) -> Staleness {
        if self.status == Status::Done {
            return Staleness::Normal;
        }
        match self.age_days(today) {
            Some(days) => Staleness::classify(days),
            None => Staleness::Normal,
        }
    }
}
