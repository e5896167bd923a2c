// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectFields};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
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
pub trait ProjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    /// Assigns a fresh id and persists.
    async fn create(&self, fields: ProjectFields) -> Result<Project, ProjectRepositoryError>;

    /// Full replace. `NotFound` when no row has this id.
    async fn update(
        &self,
        id: Uuid,
        fields: ProjectFields,
    ) -> Result<Project, ProjectRepositoryError>;

    /// Deleting a missing id is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
