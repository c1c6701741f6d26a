use std::collections::HashMap;

use tb_core::{Project, UNKNOWN_PROJECT_NAME};

/// Project-id to display-name lookup, rebuilt from each projects snapshot.
/// Tasks whose project is gone sort under the empty name and display as
/// "Unknown Project".
#[derive(Debug, Clone, Default)]
pub struct ProjectIndex {
    names: HashMap<String, String>,
}

impl ProjectIndex {
    pub fn new(projects: &[Project]) -> Self {
        let names = projects
            .iter()
            .map(|project| (project.id.clone(), project.name.clone()))
            .collect();
        Self { names }
    }

    pub fn contains(&self, project_id: &str) -> bool {
        self.names.contains_key(project_id)
    }

    /// Name used for ordering; unknown projects sort first via the
    /// empty string
    pub fn sort_name(&self, project_id: &str) -> &str {
        self.names.get(project_id).map(String::as_str).unwrap_or("")
    }

    /// Name used for display
    pub fn display_name(&self, project_id: &str) -> &str {
        self.names
            .get(project_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_PROJECT_NAME)
    }
}
