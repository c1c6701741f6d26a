use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Identity provider error: {message} {location}")]
    Provider {
        message: String,
        location: ErrorLocation,
    },

    #[error("No user is signed in {location}")]
    NotSignedIn { location: ErrorLocation },
}

impl AuthError {
    #[track_caller]
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, AuthError>;
