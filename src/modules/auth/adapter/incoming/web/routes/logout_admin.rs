use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::extract_session_token;
use crate::auth::application::use_cases::logout_admin::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Admin logout
///
/// Destroys the session behind the presented credential, if any, and clears
/// the session cookie. Succeeds without a credential.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let token = extract_session_token(&req, &data.session_cookie.name);

    match data.auth.logout.execute(token.as_deref()).await {
        Ok(()) => {
            info!("Admin logged out");
            ApiResponse::success_with_cookie(
                LogoutResponseBody {
                    message: "Logged out successfully".to_string(),
                },
                data.session_cookie.removal(),
            )
        }

        Err(LogoutError::SessionStoreError(ref e)) => {
            error!(error = %e, "Failed to destroy session");
            ApiResponse::internal_error()
        }
    }
}
