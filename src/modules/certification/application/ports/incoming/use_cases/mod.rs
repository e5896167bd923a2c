mod create_certification;
mod delete_certification;
mod get_certifications;
mod update_certification;

pub use create_certification::{CreateCertificationError, CreateCertificationUseCase};
pub use delete_certification::{DeleteCertificationError, DeleteCertificationUseCase};
pub use get_certifications::{GetCertificationsError, GetCertificationsUseCase};
pub use update_certification::{UpdateCertificationError, UpdateCertificationUseCase};
