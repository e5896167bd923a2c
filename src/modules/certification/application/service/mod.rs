mod create_certification_service;
mod delete_certification_service;
mod get_certifications_service;
mod update_certification_service;

pub use create_certification_service::CreateCertificationService;
pub use delete_certification_service::DeleteCertificationService;
pub use get_certifications_service::GetCertificationsService;
pub use update_certification_service::UpdateCertificationService;
