use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{Skill, SkillFields};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, CreateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillRepository;

pub struct CreateSkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> CreateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, fields: SkillFields) -> Result<Skill, CreateSkillError> {
        Ok(self.repository.create(fields).await?)
    }
}
