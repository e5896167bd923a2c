use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperiencesError, GetExperiencesUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;

pub struct GetExperiencesService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> GetExperiencesService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetExperiencesUseCase for GetExperiencesService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError> {
        self.repository
            .list()
            .await
            .map_err(|e| GetExperiencesError::RepositoryError(e.to_string()))
    }
}
