use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceFields};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, fields: ExperienceFields) -> Result<Experience, CreateExperienceError> {
        self.repository
            .create(fields)
            .await
            .map_err(|e| CreateExperienceError::RepositoryError(e.to_string()))
    }
}
