use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::skill::adapter::incoming::web::routes::SkillRequest;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::CreateSkillError;
use crate::shared::api::{json_body, ApiResponse, JsonBody};
use crate::AppState;

/// Create skill
///
/// Names are unique; a second skill with the same name is rejected with 409.
#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    request_body = SkillRequest,
    responses(
        (status = 201, description = "Skill created", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Missing name or unknown category", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (
            status = 409,
            description = "A skill with this name exists",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "SKILL_ALREADY_EXISTS", "message": "A skill with this name already exists" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[post("/api/skills")]
pub async fn create_skill_handler(
    admin: AdminSession,
    req: JsonBody<SkillRequest>,
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

    match data.skill.create.execute(fields).await {
        Ok(created) => {
            info!(admin = %admin.email(), skill = %created.name, "Skill created");
            ApiResponse::created(created)
        }

        Err(CreateSkillError::SkillAlreadyExists) => {
            warn!("Skill create rejected: name already taken");
            ApiResponse::conflict(
                "SKILL_ALREADY_EXISTS",
                "A skill with this name already exists",
            )
        }

        Err(CreateSkillError::RepositoryError(e)) => {
            error!("Repository error creating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
