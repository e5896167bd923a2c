use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::{Project, ProjectFields};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;

        models.into_iter().map(model_to_project).collect()
    }

    async fn create(&self, fields: ProjectFields) -> Result<Project, ProjectRepositoryError> {
        let mut model = fields_to_active_model(&fields)?;
        model.id = Set(Uuid::new_v4());

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_project(result)
    }

    async fn update(
        &self,
        id: Uuid,
        fields: ProjectFields,
    ) -> Result<Project, ProjectRepositoryError> {
        let model = fields_to_active_model(&fields)?;

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_project(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn fields_to_active_model(fields: &ProjectFields) -> Result<ActiveModel, ProjectRepositoryError> {
    Ok(ActiveModel {
        title: Set(fields.title().to_string()),
        description: Set(fields.description().to_string()),
        tags: Set(to_json(&fields.tags())?),
        image_url: Set(fields.image_url().to_string()),
        github_url: Set(fields.github_url().map(str::to_string)),
        demo_url: Set(fields.demo_url().map(str::to_string)),
        ..Default::default()
    })
}

fn model_to_project(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        tags: from_json(&model.tags)?,
        image_url: model.image_url,
        github_url: model.github_url,
        demo_url: model.demo_url,
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
