use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::fields::{optional_text, required_text};

/// Grouping used by the skills grid. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SkillCategory {
    Cloud,
    DevOps,
    Languages,
    Tools,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Cloud => "Cloud",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Languages => "Languages",
            SkillCategory::Tools => "Tools",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown skill category: {0}")]
pub struct UnknownSkillCategory(pub String);

impl FromStr for SkillCategory {
    type Err = UnknownSkillCategory;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cloud" => Ok(SkillCategory::Cloud),
            "DevOps" => Ok(SkillCategory::DevOps),
            "Languages" => Ok(SkillCategory::Languages),
            "Tools" => Ok(SkillCategory::Tools),
            other => Err(UnknownSkillCategory(other.to_string())),
        }
    }
}

/// A skill is identified by its name; there is no surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Skill {
    #[schema(example = "Rust")]
    pub name: String,
    pub category: SkillCategory,
    #[schema(example = "rust.svg")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillFieldsError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("category must be one of Cloud, DevOps, Languages, Tools (got {0:?})")]
    InvalidCategory(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillFields {
    name: String,
    category: SkillCategory,
    icon: Option<String>,
}

impl SkillFields {
    pub fn new(
        name: String,
        category: String,
        icon: Option<String>,
    ) -> Result<Self, SkillFieldsError> {
        let name = required_text(name).ok_or(SkillFieldsError::MissingField("name"))?;
        let category = required_text(category).ok_or(SkillFieldsError::MissingField("category"))?;
        let category = category
            .parse::<SkillCategory>()
            .map_err(|e| SkillFieldsError::InvalidCategory(e.0))?;

        Ok(Self {
            name,
            category,
            icon: optional_text(icon),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> SkillCategory {
        self.category
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[cfg(test)]
    pub fn into_skill(self) -> Skill {
        Skill {
            name: self.name,
            category: self.category,
            icon: self.icon,
        }
    }
}
