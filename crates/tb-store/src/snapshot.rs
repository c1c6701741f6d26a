use crate::{Document, Result as StoreErrorResult, StoreError};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use tokio::sync::broadcast;

/// Immutable full state of one collection at a point in time.
/// Later revisions supersede earlier ones; snapshots are never merged.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub collection: String,
    /// Monotonically increasing per collection, bumped once per commit
    pub revision: u64,
    pub documents: Arc<Vec<Document>>,
}

impl Snapshot {
    pub fn new(collection: impl Into<String>, revision: u64, documents: Vec<Document>) -> Self {
        Self {
            collection: collection.into(),
            revision,
            documents: Arc::new(documents),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Live snapshot subscription for one collection.
///
/// The snapshot current at subscribe time is delivered first. A slow
/// consumer may lag the broadcast channel; the error is surfaced once and
/// the stream then resumes with the oldest retained snapshot.
pub struct SnapshotStream {
    pending: Option<Snapshot>,
    receiver: broadcast::Receiver<Snapshot>,
}

impl SnapshotStream {
    pub(crate) fn new(initial: Snapshot, receiver: broadcast::Receiver<Snapshot>) -> Self {
        Self {
            pending: Some(initial),
            receiver,
        }
    }

    /// Wait for the next snapshot. Cancel safe.
    pub async fn recv(&mut self) -> StoreErrorResult<Snapshot> {
        if let Some(initial) = self.pending.take() {
            return Ok(initial);
        }

        match self.receiver.recv().await {
            Ok(snapshot) => Ok(snapshot),
            Err(broadcast::error::RecvError::Lagged(missed_count)) => {
                Err(StoreError::SnapshotLagged {
                    missed_count,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(broadcast::error::RecvError::Closed) => Err(StoreError::ChannelClosed {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
