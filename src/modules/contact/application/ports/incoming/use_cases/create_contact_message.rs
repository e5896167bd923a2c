use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactMessageFields,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContactMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        fields: ContactMessageFields,
    ) -> Result<ContactMessage, CreateContactMessageError>;
}
