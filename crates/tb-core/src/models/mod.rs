pub mod priority;
pub mod project;
pub mod project_color;
pub mod project_icon;
pub mod staleness;
pub mod status;
pub mod task;

/// Schemaless document fields as stored in the document database.
pub type Fields = serde_json::Map<String, serde_json::Value>;
