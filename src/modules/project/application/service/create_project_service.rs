use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectFields};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, fields: ProjectFields) -> Result<Project, CreateProjectError> {
        self.repository
            .create(fields)
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::project_fields;
    use crate::tests::support::in_memory_repositories::InMemoryProjectRepository;

    #[tokio::test]
    async fn created_projects_get_distinct_ids() {
        let repo = InMemoryProjectRepository::default();
        let service = CreateProjectService::new(repo.clone());

        let a = service.execute(project_fields("A")).await.unwrap();
        let b = service.execute(project_fields("B")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "A");
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
