use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::adapter::incoming::web::routes::ContactMessageRequest;
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::CreateContactMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Send contact message
///
/// Public. The server assigns the id and the timestamp.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<ContactMessage>)),
        (
            status = 400,
            description = "Missing field or malformed email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "email is not a valid address" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn create_contact_message_handler(
    req: web::Json<ContactMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let fields = match req.into_inner().into_fields() {
        Ok(fields) => fields,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.contact.create.execute(fields).await {
        Ok(created) => {
            info!(message_id = %created.id, "Contact message received");
            ApiResponse::created(created)
        }

        Err(CreateContactMessageError::RepositoryError(e)) => {
            error!("Repository error storing contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
