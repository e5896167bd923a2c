// src/modules/skill/application/ports/outgoing/skill_repository.rs

use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{Skill, SkillFields};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    /// Unique name violated on insert or rename.
    #[error("Skill already exists")]
    SkillAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Skills are keyed by name.
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError>;

    async fn create(&self, fields: SkillFields) -> Result<Skill, SkillRepositoryError>;

    /// Replaces the skill currently named `original_name`. `fields.name()`
    /// may differ, which renames it.
    async fn update(
        &self,
        original_name: &str,
        fields: SkillFields,
    ) -> Result<Skill, SkillRepositoryError>;

    /// Deleting a missing name is not an error.
    async fn delete(&self, name: &str) -> Result<(), SkillRepositoryError>;
}
