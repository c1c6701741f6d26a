use crate::drag::DragConclusion;
use crate::page::BoardPage;
use crate::shutdown_coordinator::ShutdownCoordinator;
use crate::shutdown_guard::ShutdownGuard;
use crate::view::BoardView;
use crate::{BoardError, Result as BoardErrorResult, backup, seed};

use tb_core::{ProjectDraft, TaskDraft};
use tb_store::{PROJECTS, SnapshotStream, StoreError, TASKS};

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Depth of the host command channel
pub const DEFAULT_COMMAND_BUFFER: usize = 64;

/// One board operation issued by the host
#[derive(Debug)]
pub enum BoardCommand {
    CompleteDrag(DragConclusion),
    CreateTask(TaskDraft),
    EditTask {
        task_id: String,
        draft: TaskDraft,
    },
    ArchiveTask {
        task_id: String,
    },
    RestoreTask {
        task_id: String,
    },
    DeleteTask {
        task_id: String,
    },
    CreateProject(ProjectDraft),
    EditProject {
        project_id: String,
        draft: ProjectDraft,
    },
    DeleteProject {
        project_id: String,
    },
    ToggleProject {
        project_id: String,
    },
    ClearSelection,
    Seed,
    ExportBackup {
        reply: oneshot::Sender<BoardErrorResult<String>>,
    },
    ImportBackup {
        json: String,
    },
}

impl BoardCommand {
    /// Stable name for logs and metrics
    pub fn name(&self) -> &'static str {
        match self {
            Self::CompleteDrag(_) => "complete_drag",
            Self::CreateTask(_) => "create_task",
            Self::EditTask { .. } => "edit_task",
            Self::ArchiveTask { .. } => "archive_task",
            Self::RestoreTask { .. } => "restore_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::CreateProject(_) => "create_project",
            Self::EditProject { .. } => "edit_project",
            Self::DeleteProject { .. } => "delete_project",
            Self::ToggleProject { .. } => "toggle_project",
            Self::ClearSelection => "clear_selection",
            Self::Seed => "seed",
            Self::ExportBackup { .. } => "export_backup",
            Self::ImportBackup { .. } => "import_backup",
        }
    }
}

/// Host-side handle to a running board session
#[derive(Clone)]
pub struct BoardSessionHandle {
    commands: mpsc::Sender<BoardCommand>,
    page: watch::Receiver<BoardPage>,
}

impl BoardSessionHandle {
    /// Queue a command for the session loop
    pub async fn send(&self, command: BoardCommand) -> BoardErrorResult<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| BoardError::session_closed())
    }

    /// Run an export and wait for the file contents
    pub async fn export_backup(&self) -> BoardErrorResult<String> {
        let (reply, response) = oneshot::channel();
        self.send(BoardCommand::ExportBackup { reply }).await?;
        response.await.map_err(|_| BoardError::session_closed())?
    }

    /// Watch endpoint for the render model; `changed()` wakes once per
    /// published page
    pub fn page(&self) -> watch::Receiver<BoardPage> {
        self.page.clone()
    }

    /// The most recently published render model
    pub fn current_page(&self) -> BoardPage {
        self.page.borrow().clone()
    }
}

/// The board event loop.
///
/// Owns the view exclusively. Commands arrive over a channel, snapshots
/// over the store subscriptions, and every turn of the loop publishes a
/// fresh render model to the watch channel.
pub struct BoardSession {
    view: BoardView,
    commands: mpsc::Receiver<BoardCommand>,
    page_tx: watch::Sender<BoardPage>,
}

impl BoardSession {
    /// Subscribe to both collections and start the loop on its own task
    pub async fn spawn(
        view: BoardView,
        shutdown: &ShutdownCoordinator,
    ) -> BoardErrorResult<(BoardSessionHandle, JoinHandle<()>)> {
        let tasks_stream = view.context().store.subscribe(TASKS).await?;
        let projects_stream = view.context().store.subscribe(PROJECTS).await?;

        let (command_tx, command_rx) = mpsc::channel(DEFAULT_COMMAND_BUFFER);
        let (page_tx, page_rx) = watch::channel(view.page());

        let handle = BoardSessionHandle {
            commands: command_tx,
            page: page_rx,
        };
        let session = Self {
            view,
            commands: command_rx,
            page_tx,
        };
        let shutdown_guard = shutdown.subscribe_guard();
        let join = tokio::spawn(session.run(tasks_stream, projects_stream, shutdown_guard));
        Ok((handle, join))
    }

    async fn run(
        mut self,
        mut tasks_stream: SnapshotStream,
        mut projects_stream: SnapshotStream,
        mut shutdown_guard: ShutdownGuard,
    ) {
        log::info!("Board session started");
        self.view.context().metrics.session_started();
        self.publish();

        let reason = loop {
            tokio::select! {
                // Host commands
                command = self.commands.recv() => {
                    match command {
                        Some(command) => self.handle_command(command).await,
                        None => {
                            log::info!("Board session handle dropped");
                            break "handle_dropped";
                        }
                    }
                }

                // Task collection snapshots
                snapshot = tasks_stream.recv() => {
                    match snapshot {
                        Ok(snapshot) => self.view.apply_snapshot(&snapshot),
                        Err(StoreError::SnapshotLagged { missed_count, .. }) => {
                            log::warn!("Task snapshots lagged, missed {missed_count}; resuming");
                            self.view.context().metrics.snapshot_lagged(TASKS);
                        }
                        Err(error) => {
                            log::error!("Task snapshot stream failed: {error}");
                            self.view.note_stream_error(TASKS);
                            break "tasks_stream_closed";
                        }
                    }
                }

                // Project collection snapshots
                snapshot = projects_stream.recv() => {
                    match snapshot {
                        Ok(snapshot) => self.view.apply_snapshot(&snapshot),
                        Err(StoreError::SnapshotLagged { missed_count, .. }) => {
                            log::warn!("Project snapshots lagged, missed {missed_count}; resuming");
                            self.view.context().metrics.snapshot_lagged(PROJECTS);
                        }
                        Err(error) => {
                            log::error!("Project snapshot stream failed: {error}");
                            self.view.note_stream_error(PROJECTS);
                            break "projects_stream_closed";
                        }
                    }
                }

                // Graceful shutdown
                _ = shutdown_guard.wait() => {
                    log::info!("Board session shutting down");
                    break "shutdown";
                }
            }

            self.publish();
        };

        // Cleanup
        drop(tasks_stream);
        drop(projects_stream);
        self.publish();

        self.view.context().metrics.session_closed(reason);
        log::info!("Board session closed ({reason})");
    }

    /// Dispatch one command. A failed command is logged and surfaced
    /// through metrics; it never ends the session.
    async fn handle_command(&mut self, command: BoardCommand) {
        let name = command.name();
        self.view.context().metrics.command_received(name);

        let span = crate::create_command_span(name);
        if let Err(error) = self.dispatch(command).instrument(span).await {
            log::error!("Command {name} failed: {error}");
            self.view.context().metrics.error_occurred(name);
        }
    }

    async fn dispatch(&mut self, command: BoardCommand) -> BoardErrorResult<()> {
        match command {
            BoardCommand::CompleteDrag(conclusion) => self.view.complete_drag(conclusion).await,
            BoardCommand::CreateTask(draft) => self.view.create_task(draft).await.map(|_| ()),
            BoardCommand::EditTask { task_id, draft } => {
                self.view.edit_task(&task_id, draft).await
            }
            BoardCommand::ArchiveTask { task_id } => {
                self.view.archive_task(&task_id).await.map(|_| ())
            }
            BoardCommand::RestoreTask { task_id } => self.view.restore_task(&task_id).await,
            BoardCommand::DeleteTask { task_id } => {
                self.view.hard_delete_task(&task_id).await.map(|_| ())
            }
            BoardCommand::CreateProject(draft) => {
                self.view.create_project(draft).await.map(|_| ())
            }
            BoardCommand::EditProject { project_id, draft } => {
                self.view.edit_project(&project_id, draft).await
            }
            BoardCommand::DeleteProject { project_id } => {
                self.view.delete_project(&project_id).await.map(|_| ())
            }
            BoardCommand::ToggleProject { project_id } => {
                self.view.toggle_project(&project_id);
                Ok(())
            }
            BoardCommand::ClearSelection => {
                self.view.clear_selection();
                Ok(())
            }
            BoardCommand::Seed => {
                if let Some(report) = seed::seed_starter_data(self.view.context()).await? {
                    self.view.context().dialogs.alert(&format!(
                        "Seeded {} projects and {} tasks.",
                        report.projects, report.tasks
                    ));
                }
                Ok(())
            }
            BoardCommand::ExportBackup { reply } => {
                let result = backup::export_tasks(self.view.context()).await;
                // A dropped requester is not an error
                let _ = reply.send(result);
                Ok(())
            }
            BoardCommand::ImportBackup { json } => {
                if let Some(report) = backup::import_tasks(self.view.context(), &json).await? {
                    self.view.context().dialogs.alert(&format!(
                        "Import complete: removed {} task(s), restored {} task(s).",
                        report.deleted, report.created
                    ));
                }
                Ok(())
            }
        }
    }

    /// Push the current render model to watchers, skipping no-op turns
    fn publish(&self) {
        let page = self.view.page();
        self.page_tx.send_if_modified(|current| {
            if *current == page {
                false
            } else {
                *current = page;
                true
            }
        });
    }
}
