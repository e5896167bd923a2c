use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::fields::{optional_text, required_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: Uuid,
    #[schema(example = "AWS Certified Solutions Architect")]
    pub title: String,
    #[schema(example = "Amazon Web Services")]
    pub issuer: String,
    /// Free text as printed on the certificate.
    #[schema(example = "Jan 2024")]
    pub date: String,
    pub image: Option<String>,
    #[schema(example = "https://verify.example.com/abc")]
    pub credential_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CertificationFieldsError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationFields {
    title: String,
    issuer: String,
    date: String,
    image: Option<String>,
    credential_url: String,
}

impl CertificationFields {
    pub fn new(
        title: String,
        issuer: String,
        date: String,
        image: Option<String>,
        credential_url: String,
    ) -> Result<Self, CertificationFieldsError> {
        Ok(Self {
            title: required_text(title).ok_or(CertificationFieldsError::MissingField("title"))?,
            issuer: required_text(issuer)
                .ok_or(CertificationFieldsError::MissingField("issuer"))?,
            date: required_text(date).ok_or(CertificationFieldsError::MissingField("date"))?,
            image: optional_text(image),
            credential_url: required_text(credential_url)
                .ok_or(CertificationFieldsError::MissingField("credentialUrl"))?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn credential_url(&self) -> &str {
        &self.credential_url
    }

    #[cfg(test)]
    pub fn into_certification(self, id: Uuid) -> Certification {
        Certification {
            id,
            title: self.title,
            issuer: self.issuer,
            date: self.date,
            image: self.image,
            credential_url: self.credential_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_url_is_required() {
        let err = CertificationFields::new(
            "CKA".to_string(),
            "CNCF".to_string(),
            "2024".to_string(),
            Some("badge.png".to_string()),
            "".to_string(),
        )
        .unwrap_err();

        assert_eq!(err, CertificationFieldsError::MissingField("credentialUrl"));
    }

    #[test]
    fn image_is_optional() {
        let fields = CertificationFields::new(
            "CKA".to_string(),
            "CNCF".to_string(),
            "2024".to_string(),
            None,
            "https://verify.example.com/cka".to_string(),
        )
        .unwrap();

        assert_eq!(fields.image(), None);
        assert_eq!(fields.credential_url(), "https://verify.example.com/cka");
    }
}
