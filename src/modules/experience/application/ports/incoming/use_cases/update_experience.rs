use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceFields};
use crate::modules::experience::application::ports::outgoing::ExperienceRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateExperienceError {
    #[error("Experience not found")]
    ExperienceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ExperienceRepositoryError> for UpdateExperienceError {
    fn from(err: ExperienceRepositoryError) -> Self {
        match err {
            ExperienceRepositoryError::NotFound => UpdateExperienceError::ExperienceNotFound,
            ExperienceRepositoryError::DatabaseError(msg)
            | ExperienceRepositoryError::SerializationError(msg) => {
                UpdateExperienceError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, fields: ExperienceFields)
        -> Result<Experience, UpdateExperienceError>;
}
