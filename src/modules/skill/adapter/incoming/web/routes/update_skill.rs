use actix_web::{put, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::skill::adapter::incoming::web::routes::SkillRequest;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::UpdateSkillError;
use crate::shared::api::{json_body, ApiResponse, JsonBody};
use crate::AppState;

/// Update or rename skill
///
/// The path carries the current name; the body carries the full new
/// state, including a possibly different name.
#[utoipa::path(
    put,
    path = "/api/skills/{originalName}",
    tag = "skills",
    params(("originalName" = String, Path, description = "Current skill name")),
    request_body = SkillRequest,
    responses(
        (status = 200, description = "Skill updated", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Missing name or unknown category", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
        (status = 409, description = "New name belongs to another skill", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[put("/api/skills/{originalName}")]
pub async fn update_skill_handler(
    admin: AdminSession,
    path: web::Path<String>,
    req: JsonBody<SkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = match json_body(req) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    let original_name = path.into_inner();

    let fields = match req.into_fields() {
        Ok(fields) => fields,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.skill.update.execute(&original_name, fields).await {
        Ok(updated) => {
            info!(
                admin = %admin.email(),
                from = %original_name,
                to = %updated.name,
                "Skill updated"
            );
            ApiResponse::success(updated)
        }

        Err(UpdateSkillError::SkillNotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(UpdateSkillError::SkillAlreadyExists) => {
            warn!(from = %original_name, "Skill rename rejected: name already taken");
            ApiResponse::conflict(
                "SKILL_ALREADY_EXISTS",
                "A skill with this name already exists",
            )
        }

        Err(UpdateSkillError::RepositoryError(e)) => {
            error!("Repository error updating skill {}: {}", original_name, e);
            ApiResponse::internal_error()
        }
    }
}
