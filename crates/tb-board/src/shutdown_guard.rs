use crate::ShutdownCoordinator;

use tokio::sync::broadcast;

/// Per-session handle on the shutdown signal
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
        }
    }

    /// Wait for the shutdown signal
    pub async fn wait(&mut self) {
        let _ = self.shutdown_rx.recv().await;
    }
}
