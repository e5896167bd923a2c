use async_trait::async_trait;

use crate::modules::certification::application::domain::entities::{Certification, CertificationFields};
use crate::modules::certification::application::ports::incoming::use_cases::{
    CreateCertificationError, CreateCertificationUseCase,
};
use crate::modules::certification::application::ports::outgoing::CertificationRepository;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateCertificationService<R>
where
    R: CertificationRepository,
{
    repository: R,
}

impl<R> CreateCertificationService<R>
where
    R: CertificationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCertificationUseCase for CreateCertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(&self, fields: CertificationFields) -> Result<Certification, CreateCertificationError> {
        self.repository
            .create(fields)
            .await
            .map_err(|e| CreateCertificationError::RepositoryError(e.to_string()))
    }
}
