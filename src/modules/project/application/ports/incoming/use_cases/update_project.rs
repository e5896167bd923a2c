use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectFields};
use crate::modules::project::application::ports::outgoing::ProjectRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for UpdateProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => UpdateProjectError::ProjectNotFound,
            ProjectRepositoryError::DatabaseError(msg)
            | ProjectRepositoryError::SerializationError(msg) => {
                UpdateProjectError::RepositoryError(msg)
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
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, fields: ProjectFields)
        -> Result<Project, UpdateProjectError>;
}
