use std::sync::Arc;

use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase, UpdateExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub get_list: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
}
