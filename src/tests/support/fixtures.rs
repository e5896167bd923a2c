use crate::certification::application::domain::entities::CertificationFields;
use crate::contact::application::domain::entities::ContactMessageFields;
use crate::experience::application::domain::entities::ExperienceFields;
use crate::project::application::domain::entities::ProjectFields;
use crate::skill::application::domain::entities::SkillFields;

pub fn project_fields(title: &str) -> ProjectFields {
    ProjectFields::new(
        title.to_string(),
        format!("{title} description"),
        vec!["Rust".to_string(), "Actix".to_string()],
        "cover.png".to_string(),
        Some("https://github.com/example/repo".to_string()),
        None,
    )
    .unwrap()
}

pub fn experience_fields(role: &str) -> ExperienceFields {
    ExperienceFields::new(
        role.to_string(),
        "Acme Corp".to_string(),
        "2021 - Present".to_string(),
        vec![
            "Built the platform".to_string(),
            "Led the migration".to_string(),
        ],
        None,
    )
    .unwrap()
}

pub fn certification_fields(title: &str) -> CertificationFields {
    CertificationFields::new(
        title.to_string(),
        "Cloud Academy".to_string(),
        "March 2024".to_string(),
        None,
        "https://example.com/credential/123".to_string(),
    )
    .unwrap()
}

pub fn skill_fields(name: &str, category: &str) -> SkillFields {
    SkillFields::new(name.to_string(), category.to_string(), None).unwrap()
}

pub fn contact_fields(name: &str) -> ContactMessageFields {
    ContactMessageFields::new(
        name.to_string(),
        "visitor@example.com".to_string(),
        "Hello there".to_string(),
    )
    .unwrap()
}
