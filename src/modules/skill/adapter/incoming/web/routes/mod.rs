mod create_skill;
mod delete_skill;
mod get_skills;
mod skill_request;
mod update_skill;

pub use create_skill::{create_skill_handler, __path_create_skill_handler};
pub use delete_skill::{delete_skill_handler, __path_delete_skill_handler};
pub use get_skills::{get_skills_handler, __path_get_skills_handler};
pub use skill_request::SkillRequest;
pub use update_skill::{update_skill_handler, __path_update_skill_handler};
