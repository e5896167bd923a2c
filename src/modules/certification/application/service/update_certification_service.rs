use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::application::domain::entities::{Certification, CertificationFields};
use crate::modules::certification::application::ports::incoming::use_cases::{
    UpdateCertificationError, UpdateCertificationUseCase,
};
use crate::modules::certification::application::ports::outgoing::CertificationRepository;

pub struct UpdateCertificationService<R>
where
    R: CertificationRepository,
{
    repository: R,
}

impl<R> UpdateCertificationService<R>
where
    R: CertificationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCertificationUseCase for UpdateCertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        fields: CertificationFields,
    ) -> Result<Certification, UpdateCertificationError> {
        Ok(self.repository.update(id, fields).await?)
    }
}
