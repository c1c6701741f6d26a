mod priority;
mod project;
mod project_icon;
mod staleness;
mod status;
mod task;
