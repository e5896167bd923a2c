use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceFields};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateExperienceError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(&self, fields: ExperienceFields) -> Result<Experience, CreateExperienceError>;
}
