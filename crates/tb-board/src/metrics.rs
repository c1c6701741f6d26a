use metrics::{counter, gauge};

/// Metrics collector for board operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "tb_board" }
    }

    /// Record a session event loop starting
    pub fn session_started(&self) {
        counter!(format!("{}.sessions.started", self.prefix)).increment(1);
        gauge!(format!("{}.sessions.active", self.prefix)).increment(1.0);
    }

    /// Record a session ending
    pub fn session_closed(&self, reason: &str) {
        counter!(format!("{}.sessions.closed", self.prefix)).increment(1);
        counter!(format!("{}.sessions.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.sessions.active", self.prefix)).decrement(1.0);
    }

    /// Record a host command entering the session loop
    pub fn command_received(&self, command: &str) {
        counter!(format!("{}.commands.received", self.prefix)).increment(1);
        counter!(format!("{}.commands.received.{}", self.prefix, command)).increment(1);
    }

    /// Record a snapshot applied to the cache
    pub fn snapshot_applied(&self, collection: &str, documents: usize) {
        counter!(format!("{}.snapshots.applied", self.prefix)).increment(1);
        counter!(format!("{}.snapshots.applied.{}", self.prefix, collection)).increment(1);
        gauge!(format!("{}.documents.{}", self.prefix, collection)).set(documents as f64);
    }

    /// Record a snapshot stream falling behind
    pub fn snapshot_lagged(&self, collection: &str) {
        counter!(format!("{}.snapshots.lagged", self.prefix)).increment(1);
        counter!(format!("{}.snapshots.lagged.{}", self.prefix, collection)).increment(1);
    }

    /// Record a confirmed remote write
    pub fn write_committed(&self, operation: &str) {
        counter!(format!("{}.writes.committed", self.prefix)).increment(1);
        counter!(format!("{}.writes.committed.{}", self.prefix, operation)).increment(1);
    }

    /// Record a rejected remote write
    pub fn write_failed(&self, operation: &str) {
        counter!(format!("{}.writes.failed", self.prefix)).increment(1);
        counter!(format!("{}.writes.failed.{}", self.prefix, operation)).increment(1);
    }

    /// Record a drag that committed its status change
    pub fn drag_completed(&self) {
        counter!(format!("{}.drags.completed", self.prefix)).increment(1);
    }

    /// Record a drag rolled back after a rejected write
    pub fn drag_reverted(&self) {
        counter!(format!("{}.drags.reverted", self.prefix)).increment(1);
    }

    /// Record an error surfaced outside a write path
    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
