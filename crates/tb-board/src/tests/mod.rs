//! Unit tests for the board core.

mod property_tests;

use tb_core::{Priority, Project, ProjectColor, ProjectIcon, Status, Task};

use chrono::NaiveDate;

/// Minimal task fixture; tests tweak fields as needed
fn task(id: &str, project_id: &str, status: Status) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {id}"),
        description: None,
        notes: None,
        status,
        priority: Priority::Medium,
        project_id: project_id.to_string(),
        is_archived: false,
        date: None,
        user_id: "user-1".to_string(),
        assignee: None,
        created_at: None,
        updated_by: None,
        updated_by_avatar: None,
        updated_by_id: None,
    }
}

fn dated(mut task: Task, year: i32, month: u32, day: u32) -> Task {
    task.date = NaiveDate::from_ymd_opt(year, month, day);
    task
}

fn archived(mut task: Task) -> Task {
    task.is_archived = true;
    task
}

fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        color: ProjectColor::Blue,
        icon: ProjectIcon::Code,
        created_at: None,
    }
}
