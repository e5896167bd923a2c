use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCertificationError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Idempotent: removing an absent certification succeeds.
#[async_trait]
pub trait DeleteCertificationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCertificationError>;
}
