use crate::models::priority::Priority;
use crate::models::project_color::ProjectColor;
use crate::models::project_icon::ProjectIcon;
use crate::models::status::Status;
use crate::{CoreError, Result};

use chrono::NaiveDate;

/// User input for a task about to be created, before ownership and
/// timestamps are stamped on.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub project_id: String,
    pub date: Option<NaiveDate>,
}

impl TaskDraft {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("task title must not be empty"));
        }
        if self.project_id.is_empty() {
            return Err(CoreError::validation("task must reference a project"));
        }
        Ok(())
    }
}

/// User input for a project about to be created
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub color: ProjectColor,
    pub icon: ProjectIcon,
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("project name must not be empty"));
        }
        Ok(())
    }
}
