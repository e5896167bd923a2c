use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactMessageFields,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactMessageError, CreateContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactMessageRepository;

pub struct CreateContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> CreateContactMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateContactMessageUseCase for CreateContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        fields: ContactMessageFields,
    ) -> Result<ContactMessage, CreateContactMessageError> {
        self.repository
            .create(fields)
            .await
            .map_err(|e| CreateContactMessageError::RepositoryError(e.to_string()))
    }
}
