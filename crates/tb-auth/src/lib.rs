pub mod error;
pub mod gate;
pub mod provider;
pub mod user;

pub use error::{AuthError, Result};
pub use gate::{AccessDecision, AccessGate};
pub use provider::{AuthProvider, StaticAuthProvider};
pub use user::AuthUser;
