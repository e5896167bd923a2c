use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::contact::application::domain::entities::{
    ContactMessageFields, ContactMessageFieldsError,
};

/// Contact form submission. Any client-supplied date is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMessageRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Loved the portfolio, let's talk.")]
    pub message: String,
}

impl ContactMessageRequest {
    pub fn into_fields(self) -> Result<ContactMessageFields, ContactMessageFieldsError> {
        ContactMessageFields::new(self.name, self.email, self.message)
    }
}
