use crate::{BoardError, Dialogs, Metrics, Result as BoardErrorResult};

use std::sync::Arc;

use tb_auth::{AccessDecision, AccessGate, AuthProvider, AuthUser};
use tb_config::Config;
use tb_store::DocumentStore;

/// Capabilities and policy shared by every board operation.
#[derive(Clone)]
pub struct BoardContext {
    /// Hosted document database
    pub store: Arc<dyn DocumentStore>,
    /// External identity provider
    pub auth: Arc<dyn AuthProvider>,
    /// Allow-list / admin policy
    pub gate: AccessGate,
    /// Host confirmation and messaging surface
    pub dialogs: Arc<dyn Dialogs>,
    /// Metrics collector
    pub metrics: Metrics,
    /// Most writes one committed batch may carry
    pub backup_batch_limit: usize,
}

impl BoardContext {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        auth: Arc<dyn AuthProvider>,
        gate: AccessGate,
        dialogs: Arc<dyn Dialogs>,
        backup_batch_limit: usize,
    ) -> Self {
        Self {
            store,
            auth,
            gate,
            dialogs,
            metrics: Metrics::new(),
            backup_batch_limit,
        }
    }

    /// Wire a context from loaded configuration
    pub fn from_config(
        store: Arc<dyn DocumentStore>,
        auth: Arc<dyn AuthProvider>,
        dialogs: Arc<dyn Dialogs>,
        config: &Config,
    ) -> Self {
        let gate = AccessGate::new(
            &config.access.allowed_emails,
            config.access.admin_email.clone(),
        );
        Self::new(store, auth, gate, dialogs, config.backup.batch_limit)
    }

    /// The signed-in user, provided the allow-list admits them
    pub async fn require_user(&self) -> BoardErrorResult<AuthUser> {
        let Some(user) = self.auth.current_user().await else {
            return Err(BoardError::not_signed_in());
        };
        if !self.gate.evaluate(&user).is_allowed() {
            return Err(BoardError::access_denied());
        }
        Ok(user)
    }

    /// The signed-in user, provided they hold admin rights
    pub async fn require_admin(&self) -> BoardErrorResult<AuthUser> {
        let Some(user) = self.auth.current_user().await else {
            return Err(BoardError::not_signed_in());
        };
        match self.gate.evaluate(&user) {
            AccessDecision::Denied => Err(BoardError::access_denied()),
            AccessDecision::Allowed { admin: false } => Err(BoardError::not_admin()),
            AccessDecision::Allowed { admin: true } => Ok(user),
        }
    }
}

impl std::fmt::Debug for BoardContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardContext")
            .field("backup_batch_limit", &self.backup_batch_limit)
            .field("gate", &self.gate)
            .finish()
    }
}
