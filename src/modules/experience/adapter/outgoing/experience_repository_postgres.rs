use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::experience::application::domain::entities::{Experience, ExperienceFields};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;

        models.into_iter().map(model_to_experience).collect()
    }

    async fn create(
        &self,
        fields: ExperienceFields,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let mut model = fields_to_active_model(&fields)?;
        model.id = Set(Uuid::new_v4());

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_experience(result)
    }

    async fn update(
        &self,
        id: Uuid,
        fields: ExperienceFields,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let results = Entity::update_many()
            .set(fields_to_active_model(&fields)?)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .ok_or(ExperienceRepositoryError::NotFound)
            .and_then(model_to_experience)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
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

fn fields_to_active_model(
    fields: &ExperienceFields,
) -> Result<ActiveModel, ExperienceRepositoryError> {
    let description = serde_json::to_value(fields.description())
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))?;

    Ok(ActiveModel {
        role: Set(fields.role().to_string()),
        company: Set(fields.company().to_string()),
        duration: Set(fields.duration().to_string()),
        description: Set(description),
        logo_url: Set(fields.logo_url().map(str::to_string)),
        ..Default::default()
    })
}

fn model_to_experience(
    model: experiences::Model,
) -> Result<Experience, ExperienceRepositoryError> {
    let description: Vec<String> = serde_json::from_value(model.description)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))?;

    Ok(Experience {
        id: model.id,
        role: model.role,
        company: model.company,
        duration: model.duration,
        description,
        logo_url: model.logo_url,
    })
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn sample_fields() -> ExperienceFields {
        ExperienceFields::new(
            "Backend Engineer".to_string(),
            "Acme".to_string(),
            "2021 - Present".to_string(),
            vec!["Built APIs".to_string(), "Mentored juniors".to_string()],
            None,
        )
        .unwrap()
    }

    fn mock_model(id: Uuid) -> experiences::Model {
        experiences::Model {
            id,
            role: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            duration: "2021 - Present".to_string(),
            description: serde_json::json!(["Built APIs", "Mentored juniors"]),
            logo_url: Some("https://cdn.example.com/acme.svg".to_string()),
        }
    }

    #[tokio::test]
    async fn test_list_experiences_preserves_line_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(Uuid::new_v4())]])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let experiences = repo.list().await.unwrap();

        assert_eq!(
            experiences[0].description,
            vec!["Built APIs".to_string(), "Mentored juniors".to_string()]
        );
        assert_eq!(
            experiences[0].logo_url.as_deref(),
            Some("https://cdn.example.com/acme.svg")
        );
    }

    #[tokio::test]
    async fn test_create_experience_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(id)]])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let experience = repo.create(sample_fields()).await.unwrap();

        assert_eq!(experience.id, id);
        assert_eq!(experience.company, "Acme");
    }

    #[tokio::test]
    async fn test_update_experience_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<experiences::Model>::new()])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let result = repo.update(Uuid::new_v4(), sample_fields()).await;

        assert!(matches!(result, Err(ExperienceRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_experiences_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let result = repo.list().await;

        assert!(matches!(
            result,
            Err(ExperienceRepositoryError::DatabaseError(_))
        ));
    }
}
