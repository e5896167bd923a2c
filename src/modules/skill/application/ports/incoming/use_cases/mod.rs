mod create_skill;
mod delete_skill;
mod get_skills;
mod update_skill;

pub use create_skill::{CreateSkillError, CreateSkillUseCase};
pub use delete_skill::{DeleteSkillError, DeleteSkillUseCase};
pub use get_skills::{GetSkillsError, GetSkillsUseCase};
pub use update_skill::{UpdateSkillError, UpdateSkillUseCase};
