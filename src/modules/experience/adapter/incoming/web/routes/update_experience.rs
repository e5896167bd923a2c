use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::experience::adapter::incoming::web::routes::ExperienceRequest;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::UpdateExperienceError;
use crate::shared::api::{json_body, parse_entity_id, ApiResponse, JsonBody};
use crate::AppState;

/// Replace experience
///
/// Every field is overwritten. Unknown or malformed ids are 404.
#[utoipa::path(
    put,
    path = "/api/experience/{id}",
    tag = "experience",
    params(("id" = String, Path, description = "Experience id (UUID)")),
    request_body = ExperienceRequest,
    responses(
        (status = 200, description = "Experience updated", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Missing or blank required field", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (
            status = 404,
            description = "Experience not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EXPERIENCE_NOT_FOUND", "message": "Experience not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[put("/api/experience/{id}")]
pub async fn update_experience_handler(
    admin: AdminSession,
    path: web::Path<String>,
    req: JsonBody<ExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = match json_body(req) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    let Some(id) = parse_entity_id(&path.into_inner()) else {
        return ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found");
    };

    let fields = match req.into_fields() {
        Ok(fields) => fields,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.experience.update.execute(id, fields).await {
        Ok(updated) => {
            info!(admin = %admin.email(), experience_id = %id, "Experience updated");
            ApiResponse::success(updated)
        }

        Err(UpdateExperienceError::ExperienceNotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(UpdateExperienceError::RepositoryError(e)) => {
            error!("Repository error updating experience {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
