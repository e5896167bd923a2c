use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteExperienceError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Idempotent: removing an absent experience succeeds.
#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteExperienceError>;
}
