use async_trait::async_trait;

use crate::modules::certification::application::domain::entities::{Certification, CertificationFields};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCertificationError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCertificationUseCase: Send + Sync {
    async fn execute(&self, fields: CertificationFields) -> Result<Certification, CreateCertificationError>;
}
