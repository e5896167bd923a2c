use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;

use crate::auth::application::domain::entities::{token_fingerprint, SessionRecord};
use crate::auth::application::ports::outgoing::SessionStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CurrentSessionError {
    #[error("No valid session")]
    Unauthenticated,

    #[error("Session store error: {0}")]
    SessionStoreError(String),
}

/// Resolves a presented credential to its live session.
#[async_trait]
pub trait CurrentSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<SessionRecord, CurrentSessionError>;
}

pub struct CurrentSessionService {
    sessions: Arc<dyn SessionStore + Send + Sync>,
}

impl CurrentSessionService {
    pub fn new(sessions: Arc<dyn SessionStore + Send + Sync>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl CurrentSessionUseCase for CurrentSessionService {
    async fn execute(&self, token: &str) -> Result<SessionRecord, CurrentSessionError> {
        if token.is_empty() {
            return Err(CurrentSessionError::Unauthenticated);
        }

        let fingerprint = token_fingerprint(token);

        let record = self
            .sessions
            .find(&fingerprint)
            .await
            .map_err(|e| CurrentSessionError::SessionStoreError(e.to_string()))?
            .ok_or(CurrentSessionError::Unauthenticated)?;

        if record.is_active_at(Utc::now()) {
            return Ok(record);
        }

        // Expired: reap lazily, the caller is unauthenticated either way.
        if let Err(e) = self.sessions.remove(&fingerprint).await {
            warn!(error = %e, "Failed to reap expired session");
        }

        Err(CurrentSessionError::Unauthenticated)
    }
}
