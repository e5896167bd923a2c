// src/modules/experience/application/ports/outgoing/experience_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceFields};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError>;

    /// Assigns a fresh id and persists.
    async fn create(&self, fields: ExperienceFields) -> Result<Experience, ExperienceRepositoryError>;

    /// Full replace. `NotFound` when no row has this id.
    async fn update(
        &self,
        id: Uuid,
        fields: ExperienceFields,
    ) -> Result<Experience, ExperienceRepositoryError>;

    /// Deleting a missing id is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}
