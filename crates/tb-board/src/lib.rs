pub mod backup;
pub mod board_state;
pub mod cache;
pub mod context;
pub mod dialogs;
pub mod drag;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod logger;
pub mod metrics;
pub mod ordering;
pub mod page;
pub mod project_index;
pub mod seed;
pub mod session;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod stats;
pub mod view;

pub use board_state::BoardState;
pub use cache::TaskCache;
pub use context::BoardContext;
pub use dialogs::{AutoConfirm, Dialogs};
pub use drag::{DEFAULT_ACTIVATION_DISTANCE, DragConclusion, DragEngine, DropKind, DropTarget};
pub use error::{BoardError, Result};
pub use filter::{ProjectSelection, visible_tasks};
pub use geometry::{Point, Rect};
pub use metrics::Metrics;
pub use ordering::{sort_for_archive, sort_for_display};
pub use page::{ArchiveGroup, BoardPage, ColumnTasks, ProjectOverview};
pub use project_index::ProjectIndex;
pub use seed::{SeedReport, seed_starter_data};
pub use session::{BoardCommand, BoardSession, BoardSessionHandle, DEFAULT_COMMAND_BUFFER};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use stats::project_progress;
pub use view::BoardView;

pub use backup::{export_tasks, import_tasks};

#[cfg(test)]
mod tests;

use tracing::info_span;

/// Create a tracing span for one board command.
/// All log entries within the dispatch will include the command name.
pub fn create_command_span(command: &str) -> tracing::Span {
    info_span!("board_command", command = %command)
}
