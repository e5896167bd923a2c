mod create_experience;
mod delete_experience;
mod experience_request;
mod get_experiences;
mod update_experience;

pub use create_experience::{create_experience_handler, __path_create_experience_handler};
pub use delete_experience::{delete_experience_handler, __path_delete_experience_handler};
pub use experience_request::ExperienceRequest;
pub use get_experiences::{get_experiences_handler, __path_get_experiences_handler};
pub use update_experience::{update_experience_handler, __path_update_experience_handler};
