use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::application::domain::entities::{Certification, CertificationFields};
use crate::modules::certification::application::ports::outgoing::CertificationRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCertificationError {
    #[error("Certification not found")]
    CertificationNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CertificationRepositoryError> for UpdateCertificationError {
    fn from(err: CertificationRepositoryError) -> Self {
        match err {
            CertificationRepositoryError::NotFound => UpdateCertificationError::CertificationNotFound,
            CertificationRepositoryError::DatabaseError(msg) => {
                UpdateCertificationError::RepositoryError(msg)
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
pub trait UpdateCertificationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, fields: CertificationFields)
        -> Result<Certification, UpdateCertificationError>;
}
