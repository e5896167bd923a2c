use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{Skill, SkillFields};
use crate::modules::skill::application::ports::outgoing::SkillRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillError {
    #[error("Skill not found")]
    SkillNotFound,

    /// The new name belongs to a different skill.
    #[error("Skill already exists")]
    SkillAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for UpdateSkillError {
    fn from(err: SkillRepositoryError) -> Self {
        match err {
            SkillRepositoryError::NotFound => UpdateSkillError::SkillNotFound,
            SkillRepositoryError::SkillAlreadyExists => UpdateSkillError::SkillAlreadyExists,
            SkillRepositoryError::DatabaseError(msg) => UpdateSkillError::RepositoryError(msg),
        }
    }
}

/// Looks the skill up by `original_name` and writes `fields`, renaming it
/// when the names differ.
#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        original_name: &str,
        fields: SkillFields,
    ) -> Result<Skill, UpdateSkillError>;
}
