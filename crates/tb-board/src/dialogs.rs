/// Host-provided intent confirmation and messaging.
///
/// Destructive actions (archive, hard delete, seed, import) ask for
/// confirmation through this capability before touching the store, and
/// failed optimistic writes surface through `alert`. Both calls are
/// synchronous, mirroring a blocking browser dialog.
pub trait Dialogs: Send + Sync {
    /// Ask the user to confirm; false aborts the action with no side effect
    fn confirm(&self, message: &str) -> bool;

    /// Show a transient message
    fn alert(&self, message: &str);
}

/// Headless policy for embedders without a dialog surface: every
/// confirmation is accepted and alerts go to the log.
pub struct AutoConfirm;

impl Dialogs for AutoConfirm {
    fn confirm(&self, message: &str) -> bool {
        log::debug!("Auto-confirming: {message}");
        true
    }

    fn alert(&self, message: &str) {
        log::warn!("{message}");
    }
}
