use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document not found: {collection}/{id} {location}")]
    NotFound {
        collection: String,
        id: String,
        location: ErrorLocation,
    },

    #[error("Snapshot stream lagged, missed {missed_count} snapshots {location}")]
    SnapshotLagged {
        missed_count: u64,
        location: ErrorLocation,
    },

    #[error("Snapshot channel closed {location}")]
    ChannelClosed { location: ErrorLocation },

    #[error("Store backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, StoreError>;
