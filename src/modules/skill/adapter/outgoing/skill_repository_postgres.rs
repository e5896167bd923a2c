use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::skill::application::domain::entities::{Skill, SkillCategory, SkillFields};
use crate::modules::skill::application::ports::outgoing::{
    SkillRepository, SkillRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;

        models.into_iter().map(model_to_skill).collect()
    }

    async fn create(&self, fields: SkillFields) -> Result<Skill, SkillRepositoryError> {
        let model = fields_to_active_model(&fields);

        let result = model.insert(&*self.db).await.map_err(map_name_error)?;

        model_to_skill(result)
    }

    async fn update(
        &self,
        original_name: &str,
        fields: SkillFields,
    ) -> Result<Skill, SkillRepositoryError> {
        // The key column is part of the SET list, so a rename happens in the
        // same statement and collides with the primary key on conflict.
        let model = fields_to_active_model(&fields);

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Name.eq(original_name))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_name_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(SkillRepositoryError::NotFound)?;

        model_to_skill(result)
    }

    async fn delete(&self, name: &str) -> Result<(), SkillRepositoryError> {
        Entity::delete_by_id(name.to_string())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn fields_to_active_model(fields: &SkillFields) -> ActiveModel {
    ActiveModel {
        name: Set(fields.name().to_string()),
        category: Set(fields.category().as_str().to_string()),
        icon: Set(fields.icon().map(str::to_string)),
    }
}

fn model_to_skill(model: skills::Model) -> Result<Skill, SkillRepositoryError> {
    let category = model
        .category
        .parse::<SkillCategory>()
        .map_err(|e| SkillRepositoryError::DatabaseError(e.to_string()))?;

    Ok(Skill {
        name: model.name,
        category,
        icon: model.icon,
    })
}

fn map_name_error(e: DbErr) -> SkillRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        SkillRepositoryError::SkillAlreadyExists
    } else {
        SkillRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn fields(name: &str) -> SkillFields {
        SkillFields::new(
            name.to_string(),
            "Languages".to_string(),
            Some("rust.svg".to_string()),
        )
        .unwrap()
    }

    fn mock_model(name: &str, category: &str) -> skills::Model {
        skills::Model {
            name: name.to_string(),
            category: category.to_string(),
            icon: Some("rust.svg".to_string()),
        }
    }

    fn duplicate_err() -> DbErr {
        DbErr::Custom(
            "duplicate key value violates unique constraint \"skills_pkey\"".to_string(),
        )
    }

    // ========================================================================
    // list
    // ========================================================================

    #[tokio::test]
    async fn test_list_skills_parses_categories() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                mock_model("Rust", "Languages"),
                mock_model("Kubernetes", "DevOps"),
            ]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let skills = repo.list().await.unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[1].category, SkillCategory::DevOps);
    }

    #[tokio::test]
    async fn test_list_skills_unknown_stored_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model("Rust", "Frameworks")]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.list().await,
            Err(SkillRepositoryError::DatabaseError(_))
        ));
    }

    // ========================================================================
    // create
    // ========================================================================

    #[tokio::test]
    async fn test_create_skill_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model("Rust", "Languages")]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let skill = repo.create(fields("Rust")).await.unwrap();

        assert_eq!(skill.name, "Rust");
        assert_eq!(skill.icon.as_deref(), Some("rust.svg"));
    }

    #[tokio::test]
    async fn test_create_skill_duplicate_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![duplicate_err()])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(fields("Rust")).await;

        assert!(matches!(result, Err(SkillRepositoryError::SkillAlreadyExists)));
    }

    #[tokio::test]
    async fn test_create_skill_other_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(fields("Rust")).await;

        assert!(matches!(result, Err(SkillRepositoryError::DatabaseError(_))));
    }

    // ========================================================================
    // update
    // ========================================================================

    #[tokio::test]
    async fn test_update_skill_rename() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model("Go", "Languages")]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let skill = repo.update("Rust", fields("Go")).await.unwrap();

        assert_eq!(skill.name, "Go");
    }

    #[tokio::test]
    async fn test_update_skill_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<skills::Model>::new()])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let result = repo.update("Cobol", fields("Cobol")).await;

        assert!(matches!(result, Err(SkillRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_skill_rename_collision() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![duplicate_err()])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let result = repo.update("Rust", fields("Go")).await;

        assert!(matches!(result, Err(SkillRepositoryError::SkillAlreadyExists)));
    }

    // ========================================================================
    // delete
    // ========================================================================

    #[tokio::test]
    async fn test_delete_skill_missing_row_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete("Rust").await.is_ok());
    }
}
