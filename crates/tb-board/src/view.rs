use crate::board_state::BoardState;
use crate::cache::TaskCache;
use crate::drag::{DragConclusion, DropKind};
use crate::filter::{ProjectSelection, visible_tasks};
use crate::ordering;
use crate::page::{ArchiveGroup, BoardPage, ColumnTasks, ProjectOverview};
use crate::project_index::ProjectIndex;
use crate::stats;
use crate::{BoardContext, Result as BoardErrorResult};

use chrono::Utc;
use log::{debug, info, warn};
use tb_core::{Project, ProjectDraft, ProjectPatch, Status, Task, TaskDraft, TaskPatch};
use tb_store::{PROJECTS, Snapshot, TASKS};

/// The board application core.
///
/// Owns the collection mirror, the filter selection, and the working board
/// state, and performs every remote write. Reads are cheap and synchronous;
/// writes go through the injected store. One view is owned by one session
/// loop, so nothing here needs locking.
pub struct BoardView {
    context: BoardContext,
    cache: TaskCache,
    selection: ProjectSelection,
    board_state: BoardState,
    project_index: ProjectIndex,
}

impl BoardView {
    pub fn new(context: BoardContext) -> Self {
        Self {
            context,
            cache: TaskCache::new(),
            selection: ProjectSelection::new(),
            board_state: BoardState::new(),
            project_index: ProjectIndex::default(),
        }
    }

    pub fn context(&self) -> &BoardContext {
        &self.context
    }

    pub fn selection(&self) -> &ProjectSelection {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.cache.is_loading()
    }

    // =========================================================================
    // Snapshot intake
    // =========================================================================

    /// Fold one collection snapshot into the mirror. Task snapshots rebuild
    /// the working board state; project snapshots rebuild the name index.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        match snapshot.collection.as_str() {
            TASKS => {
                self.cache.apply_tasks(snapshot);
                self.context.metrics.snapshot_applied(TASKS, snapshot.len());
                self.refresh_board();
            }
            PROJECTS => {
                self.cache.apply_projects(snapshot);
                self.project_index = ProjectIndex::new(self.cache.projects());
                self.context
                    .metrics
                    .snapshot_applied(PROJECTS, snapshot.len());
            }
            other => warn!("Ignoring snapshot for unknown collection {other}"),
        }
    }

    /// A broken stream ends the loading state; the mirror keeps its last
    /// known contents.
    pub fn note_stream_error(&mut self, collection: &str) {
        match collection {
            TASKS => self.cache.note_tasks_error(),
            PROJECTS => self.cache.note_projects_error(),
            _ => {}
        }
    }

    // =========================================================================
    // Filtering and reads
    // =========================================================================

    pub fn toggle_project(&mut self, project_id: &str) {
        let selected = self.selection.toggle(project_id);
        debug!(
            "Project {project_id} {}",
            if selected { "selected" } else { "deselected" }
        );
        self.refresh_board();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.refresh_board();
    }

    fn refresh_board(&mut self) {
        self.board_state
            .replace(visible_tasks(self.cache.tasks(), &self.selection));
    }

    /// Ordered cards of one column
    pub fn column_tasks(&self, status: Status) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .board_state
            .tasks()
            .iter()
            .filter(|task| task.status == status)
            .cloned()
            .collect();
        ordering::sort_for_display(&mut tasks, &self.project_index);
        tasks
    }

    pub fn progress(&self, project_id: &str) -> u8 {
        stats::project_progress(self.cache.tasks(), project_id)
    }

    pub fn project_overviews(&self) -> Vec<ProjectOverview> {
        self.cache
            .projects()
            .iter()
            .map(|project| ProjectOverview {
                selected: self.selection.contains(&project.id),
                progress: stats::project_progress(self.cache.tasks(), &project.id),
                project: project.clone(),
            })
            .collect()
    }

    /// Archived tasks grouped per project, groups in name order, dates
    /// ascending inside each group
    pub fn archived_groups(&self) -> Vec<ArchiveGroup> {
        let mut by_project: Vec<(String, Vec<Task>)> = Vec::new();
        for task in self.cache.tasks().iter().filter(|task| task.is_archived) {
            match by_project
                .iter_mut()
                .find(|(project_id, _)| *project_id == task.project_id)
            {
                Some((_, tasks)) => tasks.push(task.clone()),
                None => by_project.push((task.project_id.clone(), vec![task.clone()])),
            }
        }
        by_project.sort_by(|(a, _), (b, _)| {
            ordering::compare_project_names(
                self.project_index.sort_name(a),
                self.project_index.sort_name(b),
            )
            .then_with(|| a.cmp(b))
        });
        by_project
            .into_iter()
            .map(|(project_id, mut tasks)| {
                ordering::sort_for_archive(&mut tasks);
                ArchiveGroup {
                    project_name: self.project_index.display_name(&project_id).to_string(),
                    project_id,
                    tasks,
                }
            })
            .collect()
    }

    /// Assemble the full render model
    pub fn page(&self) -> BoardPage {
        BoardPage {
            loading: self.cache.is_loading(),
            columns: Status::ALL
                .iter()
                .map(|status| ColumnTasks {
                    status: *status,
                    tasks: self.column_tasks(*status),
                })
                .collect(),
            projects: self.project_overviews(),
            archived: self.archived_groups(),
        }
    }

    // =========================================================================
    // Drop resolution
    // =========================================================================

    /// Resolve a finished drag gesture against the board.
    ///
    /// A rejected write rolls the optimistic move back and surfaces a
    /// message; it is never retried and never fails the session.
    pub async fn complete_drag(&mut self, conclusion: DragConclusion) -> BoardErrorResult<()> {
        // 1. A drop over nothing aborts the gesture
        let Some(target) = conclusion.target else {
            debug!("Drag of task {} ended over no target", conclusion.task_id);
            return Ok(());
        };

        // 2. Resolve the candidate column: a card target adopts that card's
        //    current column
        let candidate = match &target {
            DropKind::Column(status) => *status,
            DropKind::Card(card_id) => match self.board_state.task(card_id) {
                Some(card) => card.status,
                None => return Ok(()),
            },
        };

        // 3. Same column is a visual-only reorder; display order is the
        //    deterministic sort, so nothing is written
        let Some(task) = self.board_state.task(&conclusion.task_id) else {
            return Ok(());
        };
        if task.status == candidate {
            return Ok(());
        }

        // 4. Optimistic move, then confirm or revert
        let Some(previous) = self
            .board_state
            .apply_status_change(&conclusion.task_id, candidate)
        else {
            return Ok(());
        };
        let fields = TaskPatch::status_only(candidate).to_fields()?;
        match self
            .context
            .store
            .update(TASKS, &conclusion.task_id, fields)
            .await
        {
            Ok(()) => {
                debug!("Moved task {} to {candidate}", conclusion.task_id);
                self.context.metrics.write_committed("move_task");
                self.context.metrics.drag_completed();
            }
            Err(error) => {
                warn!(
                    "Moving task {} to {candidate} was rejected, reverting: {error}",
                    conclusion.task_id
                );
                self.board_state
                    .revert_status_change(&conclusion.task_id, previous);
                self.context.metrics.write_failed("move_task");
                self.context.metrics.drag_reverted();
                self.context
                    .dialogs
                    .alert("The task could not be moved. Please try again.");
            }
        }
        Ok(())
    }

    // =========================================================================
    // Task actions
    // =========================================================================

    /// Create a task from user input, stamping ownership, creation time and
    /// the creator's avatar
    pub async fn create_task(&mut self, draft: TaskDraft) -> BoardErrorResult<String> {
        draft.validate()?;
        let user = self.context.require_user().await?;
        let assignee = Some(user.avatar_or_default());
        let task = Task::from_draft(draft, &user.id, assignee, Utc::now());
        let id = self.context.store.create(TASKS, task.to_fields()?).await?;
        info!("Created task {id}");
        self.context.metrics.write_committed("create_task");
        Ok(id)
    }

    /// Replace a task's mutable fields. An editor who is not the creator
    /// leaves attribution on the card.
    pub async fn edit_task(&mut self, task_id: &str, draft: TaskDraft) -> BoardErrorResult<()> {
        draft.validate()?;
        let user = self.context.require_user().await?;
        let mut patch = TaskPatch::edit(&draft);
        let foreign_edit = self
            .cache
            .task(task_id)
            .is_some_and(|task| task.user_id != user.id);
        if foreign_edit {
            patch.updated_by = Some(user.display_name.clone());
            patch.updated_by_avatar = Some(user.avatar_or_default());
            patch.updated_by_id = Some(user.id.clone());
        }
        self.context
            .store
            .update(TASKS, task_id, patch.to_fields()?)
            .await?;
        info!("Updated task {task_id}");
        self.context.metrics.write_committed("edit_task");
        Ok(())
    }

    /// Move a task to the archive after confirmation. Returns false when
    /// the user declines.
    pub async fn archive_task(&mut self, task_id: &str) -> BoardErrorResult<bool> {
        if !self.context.dialogs.confirm("Archive this task?") {
            return Ok(false);
        }
        let fields = TaskPatch::archived(true).to_fields()?;
        self.context.store.update(TASKS, task_id, fields).await?;
        info!("Archived task {task_id}");
        self.context.metrics.write_committed("archive_task");
        Ok(true)
    }

    /// Bring a task back to the board. No confirmation.
    pub async fn restore_task(&mut self, task_id: &str) -> BoardErrorResult<()> {
        let fields = TaskPatch::archived(false).to_fields()?;
        self.context.store.update(TASKS, task_id, fields).await?;
        info!("Restored task {task_id}");
        self.context.metrics.write_committed("restore_task");
        Ok(())
    }

    /// Permanently delete a task. Admin only, confirmed. Returns false
    /// when the user declines.
    pub async fn hard_delete_task(&mut self, task_id: &str) -> BoardErrorResult<bool> {
        self.context.require_admin().await?;
        if !self
            .context
            .dialogs
            .confirm("Permanently delete this task? This cannot be undone.")
        {
            return Ok(false);
        }
        self.context.store.delete(TASKS, task_id).await?;
        info!("Permanently deleted task {task_id}");
        self.context.metrics.write_committed("delete_task");
        Ok(true)
    }

    // =========================================================================
    // Project actions
    // =========================================================================

    pub async fn create_project(&mut self, draft: ProjectDraft) -> BoardErrorResult<String> {
        draft.validate()?;
        let project = Project::from_draft(draft, Utc::now());
        let id = self
            .context
            .store
            .create(PROJECTS, project.to_fields()?)
            .await?;
        info!("Created project {id}");
        self.context.metrics.write_committed("create_project");
        Ok(id)
    }

    pub async fn edit_project(
        &mut self,
        project_id: &str,
        draft: ProjectDraft,
    ) -> BoardErrorResult<()> {
        draft.validate()?;
        let patch = ProjectPatch::edit(draft.name, draft.color, draft.icon);
        self.context
            .store
            .update(PROJECTS, project_id, patch.to_fields()?)
            .await?;
        info!("Updated project {project_id}");
        self.context.metrics.write_committed("edit_project");
        Ok(())
    }

    /// Delete a project tag after confirmation. Tasks are never cascaded;
    /// orphans keep their reference and render as "Unknown Project".
    pub async fn delete_project(&mut self, project_id: &str) -> BoardErrorResult<bool> {
        if !self
            .context
            .dialogs
            .confirm("Delete this project? Its tasks are kept and will show as Unknown Project.")
        {
            return Ok(false);
        }
        self.context.store.delete(PROJECTS, project_id).await?;
        info!("Deleted project {project_id}");
        self.context.metrics.write_committed("delete_project");
        Ok(true)
    }
}
