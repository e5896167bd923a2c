mod certification_request;
mod create_certification;
mod delete_certification;
mod get_certifications;
mod update_certification;

pub use certification_request::CertificationRequest;
pub use create_certification::{create_certification_handler, __path_create_certification_handler};
pub use delete_certification::{delete_certification_handler, __path_delete_certification_handler};
pub use get_certifications::{get_certifications_handler, __path_get_certifications_handler};
pub use update_certification::{update_certification_handler, __path_update_certification_handler};
