use tb_core::{Status, Task};

/// Share of a project's tasks that are done, as a rounded percentage.
/// Counts every task of the project, archived included; a project with
/// no tasks reports 0.
pub fn project_progress(tasks: &[Task], project_id: &str) -> u8 {
    let mut total = 0usize;
    let mut done = 0usize;
    for task in tasks.iter().filter(|task| task.project_id == project_id) {
        total += 1;
        if task.status == Status::Done {
            done += 1;
        }
    }
    if total == 0 {
        return 0;
    }
    (100.0 * done as f64 / total as f64).round() as u8
}
