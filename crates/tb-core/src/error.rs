use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project color: {value} {location}")]
    InvalidProjectColor {
        value: String,
        location: ErrorLocation,
    },

    #[error("Malformed document {id}: {source} {location}")]
    Document {
        id: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Serialization failed: {source} {location}")]
    Serde {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serde {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
