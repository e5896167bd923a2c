use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::GetContactMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List inbox
///
/// Admin only. Newest message first.
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Messages, newest first", body = inline(SuccessResponse<Vec<ContactMessage>>)),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[get("/api/contact")]
pub async fn get_contact_messages_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.get_list.execute().await {
        Ok(messages) => ApiResponse::success(messages),

        Err(GetContactMessagesError::RepositoryError(e)) => {
            error!("Repository error listing contact messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}
