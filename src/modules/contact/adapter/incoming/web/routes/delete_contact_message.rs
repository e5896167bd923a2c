use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::contact::application::ports::incoming::use_cases::DeleteContactMessageError;
use crate::shared::api::{parse_entity_id, ApiResponse};
use crate::AppState;

/// Delete contact message
#[utoipa::path(
    delete,
    path = "/api/contact/{id}",
    tag = "contact",
    params(("id" = String, Path, description = "Message id (UUID)")),
    responses(
        (status = 204, description = "Message removed (or never existed)"),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[delete("/api/contact/{id}")]
pub async fn delete_contact_message_handler(
    admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_entity_id(&path.into_inner()) else {
        return ApiResponse::no_content();
    };

    match data.contact.delete.execute(id).await {
        Ok(()) => {
            info!(admin = %admin.email(), message_id = %id, "Contact message deleted");
            ApiResponse::no_content()
        }

        Err(DeleteContactMessageError::RepositoryError(e)) => {
            error!("Repository error deleting contact message {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
