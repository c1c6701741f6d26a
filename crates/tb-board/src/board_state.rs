use tb_core::{Status, Task};

/// Working copy of the filtered task list.
///
/// Rebuilt from the cache on every snapshot or selection change; the
/// rebuild discards any unconfirmed optimistic edit (last-writer-wins,
/// accepted flicker). Mutations here are purely local; the board view
/// issues the matching remote writes.
#[derive(Debug, Default)]
pub struct BoardState {
    tasks: Vec<Task>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full replacement with a freshly filtered list
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Optimistically move a task to a new column, returning its previous
    /// status for a possible revert. None means the task is absent and
    /// nothing happened.
    pub fn apply_status_change(&mut self, task_id: &str, new_status: Status) -> Option<Status> {
        let task = self.tasks.iter_mut().find(|task| task.id == task_id)?;
        let previous = task.status;
        task.status = new_status;
        Some(previous)
    }

    /// Roll a failed optimistic move back
    pub fn revert_status_change(&mut self, task_id: &str, previous: Status) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == task_id) {
            task.status = previous;
        }
    }
}
