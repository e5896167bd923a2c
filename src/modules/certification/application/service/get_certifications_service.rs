use async_trait::async_trait;

use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::certification::application::ports::incoming::use_cases::{
    GetCertificationsError, GetCertificationsUseCase,
};
use crate::modules::certification::application::ports::outgoing::CertificationRepository;

pub struct GetCertificationsService<R>
where
    R: CertificationRepository,
{
    repository: R,
}

impl<R> GetCertificationsService<R>
where
    R: CertificationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetCertificationsUseCase for GetCertificationsService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Certification>, GetCertificationsError> {
        self.repository
            .list()
            .await
            .map_err(|e| GetCertificationsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::certification::application::domain::entities::CertificationFields;
    use crate::modules::certification::application::ports::outgoing::CertificationRepositoryError;
    use crate::tests::support::fixtures::certification_fields;
    use crate::tests::support::in_memory_repositories::InMemoryCertificationRepository;
    use uuid::Uuid;

    struct BrokenRepo;

    #[async_trait]
    impl CertificationRepository for BrokenRepo {
        async fn list(&self) -> Result<Vec<Certification>, CertificationRepositoryError> {
            Err(CertificationRepositoryError::DatabaseError("connection reset".to_string()))
        }
        async fn create(&self, _f: CertificationFields) -> Result<Certification, CertificationRepositoryError> {
            unimplemented!("not needed for list tests")
        }
        async fn update(
            &self,
            _id: Uuid,
            _f: CertificationFields,
        ) -> Result<Certification, CertificationRepositoryError> {
            unimplemented!("not needed for list tests")
        }
        async fn delete(&self, _id: Uuid) -> Result<(), CertificationRepositoryError> {
            unimplemented!("not needed for list tests")
        }
    }

    #[tokio::test]
    async fn lists_everything_in_the_repository() {
        let repo = InMemoryCertificationRepository::default();
        repo.create(certification_fields("One")).await.unwrap();

        let service = GetCertificationsService::new(repo);
        let certifications = service.execute().await.unwrap();

        assert_eq!(certifications.len(), 1);
        assert_eq!(certifications[0].title, "One");
    }

    #[tokio::test]
    async fn repository_failure_is_reported() {
        let service = GetCertificationsService::new(BrokenRepo);

        match service.execute().await {
            Err(GetCertificationsError::RepositoryError(msg)) => {
                assert!(msg.contains("connection reset"))
            }
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
