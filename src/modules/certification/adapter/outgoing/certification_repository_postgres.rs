use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::certification::adapter::outgoing::sea_orm_entity::certifications::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::certification::application::domain::entities::{
    Certification, CertificationFields,
};
use crate::modules::certification::application::ports::outgoing::{
    CertificationRepository, CertificationRepositoryError,
};

#[derive(Clone)]
pub struct CertificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificationRepository for CertificationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Certification>, CertificationRepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_certification).collect())
    }

    async fn create(
        &self,
        fields: CertificationFields,
    ) -> Result<Certification, CertificationRepositoryError> {
        let mut model = fields_to_active_model(&fields);
        model.id = Set(Uuid::new_v4());

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_certification(result))
    }

    async fn update(
        &self,
        id: Uuid,
        fields: CertificationFields,
    ) -> Result<Certification, CertificationRepositoryError> {
        let results = Entity::update_many()
            .set(fields_to_active_model(&fields))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_certification)
            .ok_or(CertificationRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CertificationRepositoryError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn fields_to_active_model(fields: &CertificationFields) -> ActiveModel {
    ActiveModel {
        title: Set(fields.title().to_string()),
        issuer: Set(fields.issuer().to_string()),
        date: Set(fields.date().to_string()),
        image: Set(fields.image().map(str::to_string)),
        credential_url: Set(fields.credential_url().to_string()),
        ..Default::default()
    }
}

fn model_to_certification(model: certifications::Model) -> Certification {
    Certification {
        id: model.id,
        title: model.title,
        issuer: model.issuer,
        date: model.date,
        image: model.image,
        credential_url: model.credential_url,
    }
}

fn map_db_err(e: DbErr) -> CertificationRepositoryError {
    CertificationRepositoryError::DatabaseError(e.to_string())
}
