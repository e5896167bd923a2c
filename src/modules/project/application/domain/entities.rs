use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::fields::{optional_text, required_text};

/// A portfolio project as shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    #[schema(example = "Portfolio Backend")]
    pub title: String,
    pub description: String,
    /// Display order is preserved.
    pub tags: Vec<String>,
    #[schema(example = "https://cdn.example.com/projects/backend.png")]
    pub image_url: String,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectFieldsError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Validated input for creating or fully replacing a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    title: String,
    description: String,
    tags: Vec<String>,
    image_url: String,
    github_url: Option<String>,
    demo_url: Option<String>,
}

impl ProjectFields {
    pub fn new(
        title: String,
        description: String,
        tags: Vec<String>,
        image_url: String,
        github_url: Option<String>,
        demo_url: Option<String>,
    ) -> Result<Self, ProjectFieldsError> {
        Ok(Self {
            title: required_text(title).ok_or(ProjectFieldsError::MissingField("title"))?,
            description: required_text(description)
                .ok_or(ProjectFieldsError::MissingField("description"))?,
            tags,
            image_url: required_text(image_url)
                .ok_or(ProjectFieldsError::MissingField("imageUrl"))?,
            github_url: optional_text(github_url),
            demo_url: optional_text(demo_url),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn github_url(&self) -> Option<&str> {
        self.github_url.as_deref()
    }

    pub fn demo_url(&self) -> Option<&str> {
        self.demo_url.as_deref()
    }

    #[cfg(test)]
    pub fn into_project(self, id: Uuid) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            tags: self.tags,
            image_url: self.image_url,
            github_url: self.github_url,
            demo_url: self.demo_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, image_url: &str) -> Result<ProjectFields, ProjectFieldsError> {
        ProjectFields::new(
            title.to_string(),
            "A thing I built".to_string(),
            vec!["Rust".to_string(), "Actix".to_string()],
            image_url.to_string(),
            Some("".to_string()),
            None,
        )
    }

    #[test]
    fn valid_fields_keep_tag_order_and_drop_blank_urls() {
        let fields = fields("  Backend ", "img.png").unwrap();

        assert_eq!(fields.title(), "Backend");
        assert_eq!(fields.tags(), ["Rust".to_string(), "Actix".to_string()]);
        assert_eq!(fields.github_url(), None);
        assert_eq!(fields.demo_url(), None);
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        assert_eq!(
            fields(" ", "img.png").unwrap_err(),
            ProjectFieldsError::MissingField("title")
        );
        assert_eq!(
            fields("Backend", "").unwrap_err(),
            ProjectFieldsError::MissingField("imageUrl")
        );
    }

    #[test]
    fn project_serializes_camel_case() {
        let project = fields("Backend", "img.png")
            .unwrap()
            .into_project(Uuid::nil());
        let json = serde_json::to_value(project).unwrap();

        assert_eq!(json["imageUrl"], "img.png");
        assert!(json["githubUrl"].is_null());
        assert_eq!(json["tags"][1], "Actix");
    }
}
