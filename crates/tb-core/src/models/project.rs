//! Project entity - the tag a task is filed under.

use crate::draft::ProjectDraft;
use crate::models::Fields;
use crate::models::project_color::ProjectColor;
use crate::models::project_icon::ProjectIcon;
use crate::{CoreError, Result};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Display name used when a task references a project that no longer exists
pub const UNKNOWN_PROJECT_NAME: &str = "Unknown Project";

/// A user-defined project tag. Deleting one does not touch its tasks;
/// they keep the stale reference and render as "Unknown Project".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(skip)]
    pub id: String,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: ProjectColor,
    #[serde(default)]
    pub icon: ProjectIcon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Assemble a new project from a validated draft.
    /// The id stays empty until the store assigns one.
    pub fn from_draft(draft: ProjectDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: String::new(),
            name: draft.name,
            color: draft.color,
            icon: draft.icon,
            created_at: Some(created_at),
        }
    }

    /// Decode a stored document into a project
    #[track_caller]
    pub fn from_fields(id: impl Into<String>, fields: &Fields) -> Result<Self> {
        let id = id.into();
        let mut project: Project =
            serde_json::from_value(serde_json::Value::Object(fields.clone())).map_err(
                |source| CoreError::Document {
                    id: id.clone(),
                    source,
                    location: ErrorLocation::from(Location::caller()),
                },
            )?;
        project.id = id;
        Ok(project)
    }

    /// Encode this project as document fields (id excluded)
    pub fn to_fields(&self) -> Result<Fields> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::from_value(value)?)
    }
}
