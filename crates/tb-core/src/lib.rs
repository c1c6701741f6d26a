pub mod backup;
pub mod draft;
pub mod error;
pub mod models;
pub mod patch;

pub use error::{CoreError, Result};
pub use models::Fields;
pub use models::priority::Priority;
pub use models::project::{Project, UNKNOWN_PROJECT_NAME};
pub use models::project_color::ProjectColor;
pub use models::project_icon::ProjectIcon;
pub use models::staleness::{CRITICAL_AGE_DAYS, Staleness, WARNING_AGE_DAYS};
pub use models::status::Status;
pub use models::task::Task;

pub use backup::{BackupTask, ImportReport};
pub use draft::{ProjectDraft, TaskDraft};
pub use patch::{ProjectPatch, TaskPatch};

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
