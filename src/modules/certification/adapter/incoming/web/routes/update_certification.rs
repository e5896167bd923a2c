use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::certification::adapter::incoming::web::routes::CertificationRequest;
use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::certification::application::ports::incoming::use_cases::UpdateCertificationError;
use crate::shared::api::{json_body, parse_entity_id, ApiResponse, JsonBody};
use crate::AppState;

/// Replace certification
///
/// Every field is overwritten. Unknown or malformed ids are 404.
#[utoipa::path(
    put,
    path = "/api/certifications/{id}",
    tag = "certifications",
    params(("id" = String, Path, description = "Certification id (UUID)")),
    request_body = CertificationRequest,
    responses(
        (status = 200, description = "Certification updated", body = inline(SuccessResponse<Certification>)),
        (status = 400, description = "Missing or blank required field", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (
            status = 404,
            description = "Certification not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "CERTIFICATION_NOT_FOUND", "message": "Certification not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[put("/api/certifications/{id}")]
pub async fn update_certification_handler(
    admin: AdminSession,
    path: web::Path<String>,
    req: JsonBody<CertificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = match json_body(req) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    let Some(id) = parse_entity_id(&path.into_inner()) else {
        return ApiResponse::not_found("CERTIFICATION_NOT_FOUND", "Certification not found");
    };

    let fields = match req.into_fields() {
        Ok(fields) => fields,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.certification.update.execute(id, fields).await {
        Ok(updated) => {
            info!(admin = %admin.email(), certification_id = %id, "Certification updated");
            ApiResponse::success(updated)
        }

        Err(UpdateCertificationError::CertificationNotFound) => {
            ApiResponse::not_found("CERTIFICATION_NOT_FOUND", "Certification not found")
        }

        Err(UpdateCertificationError::RepositoryError(e)) => {
            error!("Repository error updating certification {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
