use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::token_fingerprint;
use crate::auth::application::ports::outgoing::SessionStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Session store error: {0}")]
    SessionStoreError(String),
}

/// Destroys the session behind a credential.
///
/// `None` (no credential presented) and unknown credentials both succeed.
#[async_trait]
pub trait LogoutAdminUseCase: Send + Sync {
    async fn execute(&self, token: Option<&str>) -> Result<(), LogoutError>;
}

pub struct LogoutAdminService {
    sessions: Arc<dyn SessionStore + Send + Sync>,
}

impl LogoutAdminService {
    pub fn new(sessions: Arc<dyn SessionStore + Send + Sync>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl LogoutAdminUseCase for LogoutAdminService {
    async fn execute(&self, token: Option<&str>) -> Result<(), LogoutError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Ok(());
        };

        self.sessions
            .remove(&token_fingerprint(token))
            .await
            .map_err(|e| LogoutError::SessionStoreError(e.to_string()))
    }
}
