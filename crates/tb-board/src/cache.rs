use log::warn;
use tb_core::{Project, Task};
use tb_store::Snapshot;

/// Local mirror of the `tasks` and `projects` collections.
///
/// Every snapshot replaces the matching collection wholesale; snapshots are
/// never merged. A document that fails to decode is skipped with a warning
/// rather than poisoning the whole snapshot. The loading flags start set and
/// clear on the first snapshot or stream error for their collection.
#[derive(Debug, Default)]
pub struct TaskCache {
    tasks: Vec<Task>,
    projects: Vec<Project>,
    tasks_loaded: bool,
    projects_loaded: bool,
}

impl TaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_tasks(&mut self, snapshot: &Snapshot) {
        let mut tasks = Vec::with_capacity(snapshot.len());
        for document in snapshot.documents.iter() {
            match Task::from_fields(&document.id, &document.fields) {
                Ok(task) => tasks.push(task),
                Err(error) => warn!("Skipping malformed task document: {error}"),
            }
        }
        self.tasks = tasks;
        self.tasks_loaded = true;
    }

    pub fn apply_projects(&mut self, snapshot: &Snapshot) {
        let mut projects = Vec::with_capacity(snapshot.len());
        for document in snapshot.documents.iter() {
            match Project::from_fields(&document.id, &document.fields) {
                Ok(project) => projects.push(project),
                Err(error) => warn!("Skipping malformed project document: {error}"),
            }
        }
        self.projects = projects;
        self.projects_loaded = true;
    }

    /// A failed stream still ends the loading state; the cache keeps
    /// whatever it last saw.
    pub fn note_tasks_error(&mut self) {
        self.tasks_loaded = true;
    }

    pub fn note_projects_error(&mut self) {
        self.projects_loaded = true;
    }

    /// True until both collections have reported once
    pub fn is_loading(&self) -> bool {
        !(self.tasks_loaded && self.projects_loaded)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }
}
