use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::fields::{optional_text, required_text};

/// One entry of the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    #[schema(example = "Backend Engineer")]
    pub role: String,
    #[schema(example = "Acme")]
    pub company: String,
    /// Free text, e.g. "2021 - Present".
    #[schema(example = "2021 - Present")]
    pub duration: String,
    /// Bullet lines, rendered in this order.
    pub description: Vec<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceFieldsError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceFields {
    role: String,
    company: String,
    duration: String,
    description: Vec<String>,
    logo_url: Option<String>,
}

impl ExperienceFields {
    pub fn new(
        role: String,
        company: String,
        duration: String,
        description: Vec<String>,
        logo_url: Option<String>,
    ) -> Result<Self, ExperienceFieldsError> {
        Ok(Self {
            role: required_text(role).ok_or(ExperienceFieldsError::MissingField("role"))?,
            company: required_text(company)
                .ok_or(ExperienceFieldsError::MissingField("company"))?,
            duration: required_text(duration)
                .ok_or(ExperienceFieldsError::MissingField("duration"))?,
            description,
            logo_url: optional_text(logo_url),
        })
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }

    #[cfg(test)]
    pub fn into_experience(self, id: Uuid) -> Experience {
        Experience {
            id,
            role: self.role,
            company: self.company,
            duration: self.duration,
            description: self.description,
            logo_url: self.logo_url,
        }
    }
}
