use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectFields};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, fields: ProjectFields) -> Result<Project, CreateProjectError>;
}
