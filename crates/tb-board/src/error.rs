use std::panic::Location;

use error_location::ErrorLocation;
use tb_auth::AuthError;
use tb_core::CoreError;
use tb_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("{source}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("No signed-in user {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Current user is not on the allow-list {location}")]
    AccessDenied { location: ErrorLocation },

    #[error("Admin access required {location}")]
    NotAdmin { location: ErrorLocation },

    #[error("Board session closed {location}")]
    SessionClosed { location: ErrorLocation },

    #[error("Logger setup failed: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl BoardError {
    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn access_denied() -> Self {
        Self::AccessDenied {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_admin() -> Self {
        Self::NotAdmin {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn session_closed() -> Self {
        Self::SessionClosed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for BoardError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for BoardError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for BoardError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
