use super::task;
use crate::drag::{DragEngine, DropKind, DropTarget};
use crate::filter::{ProjectSelection, visible_tasks};
use crate::geometry::{Point, Rect};
use crate::ordering::{sort_for_archive, sort_for_display};
use crate::project_index::ProjectIndex;
use crate::stats::project_progress;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use tb_core::{Status, Task};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

/// Tasks spread over four projects and all columns, some archived,
/// some dated
fn arbitrary_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(
        (0u8..4, 0u8..4, any::<bool>(), prop::option::of(0i64..365)),
        0..40,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (project, status, is_archived, date_offset))| {
                let mut t = task(
                    &format!("t{i}"),
                    &format!("p{project}"),
                    Status::ALL[status as usize],
                );
                t.is_archived = is_archived;
                t.date = date_offset.map(|days| base_date() + Duration::days(days));
                t
            })
            .collect()
    })
}

fn column_targets() -> Vec<DropTarget> {
    vec![
        DropTarget::column(Status::Backlog, Rect::new(0.0, 0.0, 200.0, 600.0)),
        DropTarget::column(Status::Todo, Rect::new(200.0, 0.0, 200.0, 600.0)),
        DropTarget::column(Status::InProgress, Rect::new(400.0, 0.0, 200.0, 600.0)),
        DropTarget::column(Status::Done, Rect::new(600.0, 0.0, 200.0, 600.0)),
    ]
}

// =========================================================================
// Property-Based Tests - Filtering
// =========================================================================

proptest! {
    #[test]
    fn given_any_tasks_when_filtered_then_no_archived_survive(
        tasks in arbitrary_tasks(),
        selected in prop::collection::vec(any::<bool>(), 4),
    ) {
        let mut selection = ProjectSelection::new();
        for (index, pick) in selected.iter().enumerate() {
            if *pick {
                selection.toggle(&format!("p{index}"));
            }
        }

        let visible = visible_tasks(&tasks, &selection);

        prop_assert!(visible.iter().all(|t| !t.is_archived));
        prop_assert!(visible.iter().all(|t| selection.matches(t)));
    }

    #[test]
    fn given_empty_selection_when_filtered_then_exactly_unarchived_kept(
        tasks in arbitrary_tasks(),
    ) {
        let selection = ProjectSelection::new();

        let visible = visible_tasks(&tasks, &selection);

        let expected = tasks.iter().filter(|t| !t.is_archived).count();
        prop_assert_eq!(visible.len(), expected);
    }
}

// =========================================================================
// Property-Based Tests - Ordering
// =========================================================================

proptest! {
    #[test]
    fn given_any_tasks_when_sorted_for_display_then_permutation_of_input(
        mut tasks in arbitrary_tasks(),
    ) {
        let index = ProjectIndex::new(&[]);
        let mut expected: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
        expected.sort();

        sort_for_display(&mut tasks, &index);

        let mut actual: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn given_sorted_tasks_when_sorted_again_then_order_unchanged(
        mut tasks in arbitrary_tasks(),
    ) {
        let index = ProjectIndex::new(&[]);

        sort_for_display(&mut tasks, &index);
        let once: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
        sort_for_display(&mut tasks, &index);
        let twice: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn given_any_tasks_when_sorted_for_archive_then_dates_non_decreasing(
        mut tasks in arbitrary_tasks(),
    ) {
        sort_for_archive(&mut tasks);

        for pair in tasks.windows(2) {
            let a = pair[0].date.unwrap_or_default();
            let b = pair[1].date.unwrap_or_default();
            prop_assert!(a <= b);
        }
    }
}

// =========================================================================
// Property-Based Tests - Progress
// =========================================================================

proptest! {
    #[test]
    fn given_any_tasks_when_progress_computed_then_within_percent_range(
        tasks in arbitrary_tasks(),
        project in 0u8..4,
    ) {
        let progress = project_progress(&tasks, &format!("p{project}"));

        prop_assert!(progress <= 100);
    }
}

// =========================================================================
// Property-Based Tests - Drag Engine
// =========================================================================

proptest! {
    #[test]
    fn given_any_pointer_path_when_released_then_engine_returns_to_idle(
        press_x in 0.0f32..800.0,
        press_y in 0.0f32..600.0,
        move_x in -400.0f32..1200.0,
        move_y in -400.0f32..1000.0,
    ) {
        let mut engine = DragEngine::default();
        engine.set_targets(column_targets());

        engine.press("a", Rect::new(press_x, press_y, 180.0, 80.0), Point::new(press_x, press_y));
        engine.move_to(Point::new(move_x, move_y));
        let conclusion = engine.release();

        prop_assert!(!engine.is_dragging());
        prop_assert!(engine.active_task().is_none());
        if let Some(conclusion) = conclusion {
            prop_assert_eq!(conclusion.task_id.as_str(), "a");
            if let Some(target) = conclusion.target {
                let declared: Vec<DropKind> =
                    column_targets().into_iter().map(|t| t.kind).collect();
                prop_assert!(declared.contains(&target));
            }
        }
    }

    #[test]
    fn given_any_keyboard_steps_when_released_then_target_is_declared_or_none(
        current in 0usize..4,
        steps in prop::collection::vec(any::<bool>(), 0..12),
    ) {
        let mut engine = DragEngine::default();
        engine.set_targets(column_targets());

        engine.begin_keyboard("a", Status::ALL[current]);
        for forward in steps {
            if forward {
                engine.key_next();
            } else {
                engine.key_prev();
            }
        }
        let conclusion = engine.release();

        prop_assert!(!engine.is_dragging());
        let conclusion = conclusion.expect("keyboard drag always concludes");
        let declared: Vec<DropKind> = column_targets().into_iter().map(|t| t.kind).collect();
        let target = conclusion.target.expect("targets are non-empty");
        prop_assert!(declared.contains(&target));
    }
}
