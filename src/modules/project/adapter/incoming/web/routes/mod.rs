mod create_project;
mod delete_project;
mod get_projects;
mod project_request;
mod update_project;

pub use create_project::{create_project_handler, __path_create_project_handler};
pub use delete_project::{delete_project_handler, __path_delete_project_handler};
pub use get_projects::{get_projects_handler, __path_get_projects_handler};
pub use project_request::ProjectRequest;
pub use update_project::{update_project_handler, __path_update_project_handler};
