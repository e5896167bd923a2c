use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::experience::adapter::incoming::web::routes::ExperienceRequest;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::CreateExperienceError;
use crate::shared::api::{json_body, ApiResponse, JsonBody};
use crate::AppState;

/// Create experience
#[utoipa::path(
    post,
    path = "/api/experience",
    tag = "experience",
    request_body = ExperienceRequest,
    responses(
        (status = 201, description = "Experience created", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Missing or blank required field", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[post("/api/experience")]
pub async fn create_experience_handler(
    admin: AdminSession,
    req: JsonBody<ExperienceRequest>,
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

    match data.experience.create.execute(fields).await {
        Ok(created) => {
            info!(admin = %admin.email(), experience_id = %created.id, "Experience created");
            ApiResponse::created(created)
        }

        Err(CreateExperienceError::RepositoryError(e)) => {
            error!("Repository error creating experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
