use crate::{AuthUser, Result as AuthErrorResult};

use async_trait::async_trait;
use tokio::sync::watch;

/// Capability handle to the external identity provider.
///
/// `auth_state` hands out a watch receiver: the current signed-in state is
/// observable immediately and every sign-in or sign-out updates it, so a
/// fresh subscriber always sees a value without waiting.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Currently signed-in user, if any
    async fn current_user(&self) -> Option<AuthUser>;

    /// End the current session
    async fn sign_out(&self) -> AuthErrorResult<()>;

    /// Watch the signed-in state
    fn auth_state(&self) -> watch::Receiver<Option<AuthUser>>;
}

/// Provider backed by a fixed, directly settable state. Serves tests and
/// hosts that manage sign-in themselves.
pub struct StaticAuthProvider {
    state: watch::Sender<Option<AuthUser>>,
}

impl StaticAuthProvider {
    pub fn signed_in(user: AuthUser) -> Self {
        let (state, _) = watch::channel(Some(user));
        Self { state }
    }

    pub fn signed_out() -> Self {
        let (state, _) = watch::channel(None);
        Self { state }
    }

    /// Simulate an external auth state change
    pub fn set_user(&self, user: Option<AuthUser>) {
        self.state.send_replace(user);
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn current_user(&self) -> Option<AuthUser> {
        self.state.borrow().clone()
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        log::info!("Signing out current user");
        self.state.send_replace(None);
        Ok(())
    }

    fn auth_state(&self) -> watch::Receiver<Option<AuthUser>> {
        self.state.subscribe()
    }
}
