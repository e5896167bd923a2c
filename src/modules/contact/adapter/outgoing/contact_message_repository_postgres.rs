use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactMessageFields,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};

#[derive(Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_message).collect())
    }

    async fn create(
        &self,
        fields: ContactMessageFields,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(fields.name().to_string()),
            email: Set(fields.email().to_string()),
            message: Set(fields.message().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_message(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn model_to_message(model: contact_messages::Model) -> ContactMessage {
    ContactMessage {
        id: model.id,
        name: model.name,
        email: model.email,
        message: model.message,
        date: model.created_at.with_timezone(&Utc),
    }
}

fn map_db_err(e: DbErr) -> ContactMessageRepositoryError {
    ContactMessageRepositoryError::DatabaseError(e.to_string())
}
