use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceFields};
use crate::modules::experience::application::ports::incoming::use_cases::{
    UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;

pub struct UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        fields: ExperienceFields,
    ) -> Result<Experience, UpdateExperienceError> {
        Ok(self.repository.update(id, fields).await?)
    }
}
