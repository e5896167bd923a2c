use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::certification::application::domain::entities::{
    CertificationFields, CertificationFieldsError,
};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationRequest {
    #[schema(example = "AWS Certified Solutions Architect")]
    pub title: String,
    #[schema(example = "Amazon Web Services")]
    pub issuer: String,
    #[schema(example = "Jan 2024")]
    pub date: String,
    pub image: Option<String>,
    #[schema(example = "https://verify.example.com/abc")]
    pub credential_url: String,
}

impl CertificationRequest {
    pub fn into_fields(self) -> Result<CertificationFields, CertificationFieldsError> {
        CertificationFields::new(
            self.title,
            self.issuer,
            self.date,
            self.image,
            self.credential_url,
        )
    }
}
