use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::certification::adapter::incoming::web::routes::CertificationRequest;
use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::certification::application::ports::incoming::use_cases::CreateCertificationError;
use crate::shared::api::{json_body, ApiResponse, JsonBody};
use crate::AppState;

/// Create certification
#[utoipa::path(
    post,
    path = "/api/certifications",
    tag = "certifications",
    request_body = CertificationRequest,
    responses(
        (status = 201, description = "Certification created", body = inline(SuccessResponse<Certification>)),
        (status = 400, description = "Missing or blank required field", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[post("/api/certifications")]
pub async fn create_certification_handler(
    admin: AdminSession,
    req: JsonBody<CertificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = match json_body(req) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    let fields = match req.into_fields() {
        Ok(fields) => fields,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.certification.create.execute(fields).await {
        Ok(created) => {
            info!(admin = %admin.email(), certification_id = %created.id, "Certification created");
            ApiResponse::created(created)
        }

        Err(CreateCertificationError::RepositoryError(e)) => {
            error!("Repository error creating certification: {}", e);
            ApiResponse::internal_error()
        }
    }
}
