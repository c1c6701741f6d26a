use std::collections::BTreeSet;

use tb_core::Task;

/// The set of project ids the board is narrowed to. Empty means all
/// projects. Ephemeral UI state, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    selected: BTreeSet<String>,
}

impl ProjectSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a project in or out of the selection, returning whether it
    /// is selected afterwards
    pub fn toggle(&mut self, project_id: &str) -> bool {
        if self.selected.remove(project_id) {
            false
        } else {
            self.selected.insert(project_id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, project_id: &str) -> bool {
        self.selected.contains(project_id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether the selection lets this task through (archival is handled
    /// separately by `visible_tasks`)
    pub fn matches(&self, task: &Task) -> bool {
        self.is_empty() || self.selected.contains(&task.project_id)
    }
}

/// The board's working set: non-archived tasks passing the selection.
/// Pure and total; recomputed on every cache or selection change.
pub fn visible_tasks(all: &[Task], selection: &ProjectSelection) -> Vec<Task> {
    all.iter()
        .filter(|task| !task.is_archived && selection.matches(task))
        .cloned()
        .collect()
}
