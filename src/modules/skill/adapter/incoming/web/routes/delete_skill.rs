use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::skill::application::ports::incoming::use_cases::DeleteSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete skill
#[utoipa::path(
    delete,
    path = "/api/skills/{name}",
    tag = "skills",
    params(("name" = String, Path, description = "Skill name")),
    responses(
        (status = 204, description = "Skill removed (or never existed)"),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[delete("/api/skills/{name}")]
pub async fn delete_skill_handler(
    admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let name = path.into_inner();

    match data.skill.delete.execute(&name).await {
        Ok(()) => {
            info!(admin = %admin.email(), skill = %name, "Skill deleted");
            ApiResponse::no_content()
        }

        Err(DeleteSkillError::RepositoryError(e)) => {
            error!("Repository error deleting skill {}: {}", name, e);
            ApiResponse::internal_error()
        }
    }
}
