//! Deterministic display ordering. Card position on the board is always
//! the result of this sort, never of where a card was dropped.

use crate::ProjectIndex;

use std::cmp::Ordering;

use chrono::NaiveDate;
use tb_core::Task;

/// Case-insensitive name comparison with the raw name as tiebreak, so
/// "alpha" and "Alpha" order stably without an ICU dependency
pub fn compare_project_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Due dates ascending, undated tasks last
pub fn compare_dates_undated_last(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Column order: project display name first, then due date, then the
/// incoming (snapshot) order via stable sort
pub fn compare_for_display(a: &Task, b: &Task, projects: &ProjectIndex) -> Ordering {
    compare_project_names(
        projects.sort_name(&a.project_id),
        projects.sort_name(&b.project_id),
    )
    .then_with(|| compare_dates_undated_last(a.date, b.date))
}

pub fn sort_for_display(tasks: &mut [Task], projects: &ProjectIndex) {
    tasks.sort_by(|a, b| compare_for_display(a, b, projects));
}

/// Archive order inside a project group: date ascending with undated
/// tasks first, pinned at the epoch
pub fn sort_for_archive(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| task.date.unwrap_or_default());
}
