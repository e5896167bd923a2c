use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{Skill, SkillFields};
use crate::modules::skill::application::ports::outgoing::SkillRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillError {
    #[error("Skill already exists")]
    SkillAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for CreateSkillError {
    fn from(err: SkillRepositoryError) -> Self {
        match err {
            SkillRepositoryError::SkillAlreadyExists => CreateSkillError::SkillAlreadyExists,
            SkillRepositoryError::DatabaseError(msg) => CreateSkillError::RepositoryError(msg),
            SkillRepositoryError::NotFound => CreateSkillError::RepositoryError(
                "unexpected not found while creating skill".to_string(),
            ),
        }
    }
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, fields: SkillFields) -> Result<Skill, CreateSkillError>;
}
