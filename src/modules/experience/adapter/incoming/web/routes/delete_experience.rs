use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::experience::application::ports::incoming::use_cases::DeleteExperienceError;
use crate::shared::api::{parse_entity_id, ApiResponse};
use crate::AppState;

/// Delete experience
///
/// Idempotent: unknown and malformed ids also answer 204.
#[utoipa::path(
    delete,
    path = "/api/experience/{id}",
    tag = "experience",
    params(("id" = String, Path, description = "Experience id (UUID)")),
    responses(
        (status = 204, description = "Experience removed (or never existed)"),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[delete("/api/experience/{id}")]
pub async fn delete_experience_handler(
    admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_entity_id(&path.into_inner()) else {
        return ApiResponse::no_content();
    };

    match data.experience.delete.execute(id).await {
        Ok(()) => {
            info!(admin = %admin.email(), experience_id = %id, "Experience deleted");
            ApiResponse::no_content()
        }

        Err(DeleteExperienceError::RepositoryError(e)) => {
            error!("Repository error deleting experience {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
