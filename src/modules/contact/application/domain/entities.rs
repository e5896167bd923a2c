use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::fields::required_text;

/// A message left through the public contact form.
///
/// `date` is assigned by the store when the message is persisted and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Loved the portfolio, let's talk.")]
    pub message: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMessageFieldsError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email is not a valid address")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageFields {
    name: String,
    email: String,
    message: String,
}

impl ContactMessageFields {
    pub fn new(
        name: String,
        email: String,
        message: String,
    ) -> Result<Self, ContactMessageFieldsError> {
        let name = required_text(name).ok_or(ContactMessageFieldsError::MissingField("name"))?;
        let email =
            required_text(email).ok_or(ContactMessageFieldsError::MissingField("email"))?;
        let message =
            required_text(message).ok_or(ContactMessageFieldsError::MissingField("message"))?;

        if !EmailAddress::is_valid(&email) {
            return Err(ContactMessageFieldsError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    #[cfg(test)]
    pub fn into_contact_message(self, id: Uuid, date: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            date,
        }
    }
}
