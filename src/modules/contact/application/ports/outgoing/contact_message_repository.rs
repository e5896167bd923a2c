use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactMessageFields,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Append-only inbox. Messages are never edited.
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;

    /// Assigns the id and the creation timestamp.
    async fn create(
        &self,
        fields: ContactMessageFields,
    ) -> Result<ContactMessage, ContactMessageRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError>;
}
