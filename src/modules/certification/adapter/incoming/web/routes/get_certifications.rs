use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::certification::application::ports::incoming::use_cases::GetCertificationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List certifications
///
/// Public read used by the certifications section.
#[utoipa::path(
    get,
    path = "/api/certifications",
    tag = "certifications",
    responses(
        (status = 200, description = "All certifications", body = inline(SuccessResponse<Vec<Certification>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/certifications")]
pub async fn get_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.certification.get_list.execute().await {
        Ok(certifications) => ApiResponse::success(certifications),

        Err(GetCertificationsError::RepositoryError(e)) => {
            error!("Repository error listing certifications: {}", e);
            ApiResponse::internal_error()
        }
    }
}
