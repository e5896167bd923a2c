use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::{
    DeleteContactMessageError, DeleteContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactMessageRepository;

pub struct DeleteContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> DeleteContactMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteContactMessageUseCase for DeleteContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContactMessageError> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| DeleteContactMessageError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::contact_fields;
    use crate::tests::support::in_memory_repositories::InMemoryContactMessageRepository;

    #[tokio::test]
    async fn removes_message_and_tolerates_repeat() {
        let repo = InMemoryContactMessageRepository::default();
        let message = repo.create(contact_fields("A")).await.unwrap();
        let service = DeleteContactMessageService::new(repo.clone());

        service.execute(message.id).await.unwrap();
        service.execute(message.id).await.unwrap();

        assert!(repo.list().await.unwrap().is_empty());
    }
}
