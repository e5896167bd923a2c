use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::skill::application::domain::entities::{SkillFields, SkillFieldsError};

/// Body of create and update. On update, `name` is the new name.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillRequest {
    #[schema(example = "Rust")]
    pub name: String,
    /// One of `Cloud`, `DevOps`, `Languages`, `Tools`.
    #[schema(example = "Languages")]
    pub category: String,
    #[schema(example = "rust.svg")]
    pub icon: Option<String>,
}

impl SkillRequest {
    pub fn into_fields(self) -> Result<SkillFields, SkillFieldsError> {
        SkillFields::new(self.name, self.category, self.icon)
    }
}
