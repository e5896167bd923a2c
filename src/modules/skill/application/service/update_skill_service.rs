use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{Skill, SkillFields};
use crate::modules::skill::application::ports::incoming::use_cases::{
    UpdateSkillError, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillRepository;

pub struct UpdateSkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> UpdateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        original_name: &str,
        fields: SkillFields,
    ) -> Result<Skill, UpdateSkillError> {
        Ok(self.repository.update(original_name, fields).await?)
    }
}
