use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::application::ports::incoming::use_cases::{
    DeleteCertificationError, DeleteCertificationUseCase,
};
use crate::modules::certification::application::ports::outgoing::CertificationRepository;

pub struct DeleteCertificationService<R>
where
    R: CertificationRepository,
{
    repository: R,
}

impl<R> DeleteCertificationService<R>
where
    R: CertificationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCertificationUseCase for DeleteCertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCertificationError> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| DeleteCertificationError::RepositoryError(e.to_string()))
    }
}
