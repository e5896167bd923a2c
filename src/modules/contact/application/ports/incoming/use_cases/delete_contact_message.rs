use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteContactMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteContactMessageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContactMessageError>;
}
