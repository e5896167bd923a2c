use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;

pub struct GetProjectsService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> GetProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProjectsUseCase for GetProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        self.repository
            .list()
            .await
            .map_err(|e| GetProjectsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::ProjectFields;
    use crate::modules::project::application::ports::outgoing::ProjectRepositoryError;
    use crate::tests::support::fixtures::project_fields;
    use crate::tests::support::in_memory_repositories::InMemoryProjectRepository;
    use uuid::Uuid;

    struct BrokenRepo;

    #[async_trait]
    impl ProjectRepository for BrokenRepo {
        async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
            Err(ProjectRepositoryError::DatabaseError("connection reset".to_string()))
        }
        async fn create(&self, _f: ProjectFields) -> Result<Project, ProjectRepositoryError> {
            unimplemented!("not needed for list tests")
        }
        async fn update(
            &self,
            _id: Uuid,
            _f: ProjectFields,
        ) -> Result<Project, ProjectRepositoryError> {
            unimplemented!("not needed for list tests")
        }
        async fn delete(&self, _id: Uuid) -> Result<(), ProjectRepositoryError> {
            unimplemented!("not needed for list tests")
        }
    }

    #[tokio::test]
    async fn lists_everything_in_the_repository() {
        let repo = InMemoryProjectRepository::default();
        repo.create(project_fields("One")).await.unwrap();

        let service = GetProjectsService::new(repo);
        let projects = service.execute().await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "One");
    }

    #[tokio::test]
    async fn repository_failure_is_reported() {
        let service = GetProjectsService::new(BrokenRepo);

        match service.execute().await {
            Err(GetProjectsError::RepositoryError(msg)) => {
                assert!(msg.contains("connection reset"))
            }
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
