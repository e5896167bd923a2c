use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectFields};
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        fields: ProjectFields,
    ) -> Result<Project, UpdateProjectError> {
        Ok(self.repository.update(id, fields).await?)
    }
}
