use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactMessagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetContactMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactMessage>, GetContactMessagesError>;
}
