use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::certification::application::ports::incoming::use_cases::DeleteCertificationError;
use crate::shared::api::{parse_entity_id, ApiResponse};
use crate::AppState;

/// Delete certification
///
/// Idempotent: unknown and malformed ids also answer 204.
#[utoipa::path(
    delete,
    path = "/api/certifications/{id}",
    tag = "certifications",
    params(("id" = String, Path, description = "Certification id (UUID)")),
    responses(
        (status = 204, description = "Certification removed (or never existed)"),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[delete("/api/certifications/{id}")]
pub async fn delete_certification_handler(
    admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_entity_id(&path.into_inner()) else {
        return ApiResponse::no_content();
    };

    match data.certification.delete.execute(id).await {
        Ok(()) => {
            info!(admin = %admin.email(), certification_id = %id, "Certification deleted");
            ApiResponse::no_content()
        }

        Err(DeleteCertificationError::RepositoryError(e)) => {
            error!("Repository error deleting certification {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
