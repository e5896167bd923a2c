use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::project::application::domain::entities::{ProjectFields, ProjectFieldsError};

/// Body of create and update. Update replaces every field.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRequest {
    #[schema(example = "Portfolio Backend")]
    pub title: String,
    #[schema(example = "Actix + SeaORM API for my portfolio")]
    pub description: String,
    #[schema(example = json!(["Rust", "PostgreSQL"]))]
    pub tags: Vec<String>,
    #[schema(example = "https://cdn.example.com/projects/backend.png")]
    pub image_url: String,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
}

impl ProjectRequest {
    pub fn into_fields(self) -> Result<ProjectFields, ProjectFieldsError> {
        ProjectFields::new(
            self.title,
            self.description,
            self.tags,
            self.image_url,
            self.github_url,
            self.demo_url,
        )
    }
}
