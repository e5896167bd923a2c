// src/modules/certification/application/ports/outgoing/certification_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::application::domain::entities::{Certification, CertificationFields};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificationRepositoryError {
    #[error("Certification not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Certification>, CertificationRepositoryError>;

    /// Assigns a fresh id and persists.
    async fn create(&self, fields: CertificationFields) -> Result<Certification, CertificationRepositoryError>;

    /// Full replace. `NotFound` when no row has this id.
    async fn update(
        &self,
        id: Uuid,
        fields: CertificationFields,
    ) -> Result<Certification, CertificationRepositoryError>;

    /// Deleting a missing id is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), CertificationRepositoryError>;
}
