use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::experience::application::domain::entities::{
    ExperienceFields, ExperienceFieldsError,
};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceRequest {
    #[schema(example = "Backend Engineer")]
    pub role: String,
    #[schema(example = "Acme")]
    pub company: String,
    #[schema(example = "2021 - Present")]
    pub duration: String,
    #[schema(example = json!(["Built the billing API", "Ran on-call"]))]
    pub description: Vec<String>,
    pub logo_url: Option<String>,
}

impl ExperienceRequest {
    pub fn into_fields(self) -> Result<ExperienceFields, ExperienceFieldsError> {
        ExperienceFields::new(
            self.role,
            self.company,
            self.duration,
            self.description,
            self.logo_url,
        )
    }
}
