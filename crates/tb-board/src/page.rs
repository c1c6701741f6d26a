use tb_core::{Project, Status, Task};

/// Render-ready board contents, published by the session after every state
/// change. Owned data so the host can hold it across frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardPage {
    /// True until both collections have reported once
    pub loading: bool,
    /// One entry per workflow column, in board order
    pub columns: Vec<ColumnTasks>,
    /// Sidebar projects with selection and progress
    pub projects: Vec<ProjectOverview>,
    /// Archived tasks grouped by project
    pub archived: Vec<ArchiveGroup>,
}

/// Ordered cards of one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTasks {
    pub status: Status,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectOverview {
    pub project: Project,
    /// Part of the current filter selection
    pub selected: bool,
    /// Rounded percentage of done tasks
    pub progress: u8,
}

/// One project's archived tasks, date ascending with undated first
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveGroup {
    pub project_id: String,
    pub project_name: String,
    pub tasks: Vec<Task>,
}
