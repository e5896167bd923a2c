use async_trait::async_trait;

use crate::auth::application::domain::entities::SessionRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),

    #[error("Session record corrupted: {0}")]
    Corrupted(String),
}

/// Ephemeral mapping from token fingerprint to session record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, fingerprint: &str, record: &SessionRecord)
        -> Result<(), SessionStoreError>;

    async fn find(&self, fingerprint: &str) -> Result<Option<SessionRecord>, SessionStoreError>;

    /// Removing an unknown fingerprint is not an error.
    async fn remove(&self, fingerprint: &str) -> Result<(), SessionStoreError>;

    /// Liveness check used by the readiness probe.
    async fn ping(&self) -> Result<(), SessionStoreError>;
}
