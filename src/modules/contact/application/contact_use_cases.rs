use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactMessageUseCase, DeleteContactMessageUseCase, GetContactMessagesUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub get_list: Arc<dyn GetContactMessagesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateContactMessageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContactMessageUseCase + Send + Sync>,
}
