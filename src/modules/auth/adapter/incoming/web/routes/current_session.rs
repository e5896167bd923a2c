use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::extract_session_token;
use crate::auth::application::domain::entities::{AdminRole, SessionRecord};
use crate::auth::application::use_cases::current_session::CurrentSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpRequest, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SessionUserDto {
    #[schema(example = "admin@example.com")]
    pub email: String,

    #[schema(example = "admin")]
    pub role: String,
}

/// Session state as seen by the admin console.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateResponse {
    #[schema(example = true)]
    pub is_authenticated: bool,
    pub user: SessionUserDto,
    pub expires_at: DateTime<Utc>,
}

impl From<&SessionRecord> for SessionStateResponse {
    fn from(record: &SessionRecord) -> Self {
        let role = match record.user.role {
            AdminRole::Admin => "admin",
        };

        Self {
            is_authenticated: record.is_authenticated,
            user: SessionUserDto {
                email: record.user.email.clone(),
                role: role.to_string(),
            },
            expires_at: record.expires_at,
        }
    }
}

/// Current session
///
/// Reports the identity behind the presented credential.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = "auth",
    responses(
        (status = 200, description = "Session is live", body = inline(SuccessResponse<SessionStateResponse>)),
        (
            status = 401,
            description = "No valid session",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "UNAUTHENTICATED",
                    "message": "Not authenticated"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[get("/api/auth/user")]
pub async fn current_session_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let token = extract_session_token(&req, &data.session_cookie.name).unwrap_or_default();

    match data.auth.current_session.execute(&token).await {
        Ok(record) => ApiResponse::success(SessionStateResponse::from(&record)),

        Err(CurrentSessionError::Unauthenticated) => {
            ApiResponse::unauthorized("UNAUTHENTICATED", "Not authenticated")
        }

        Err(CurrentSessionError::SessionStoreError(ref e)) => {
            error!(error = %e, "Session lookup failed");
            ApiResponse::internal_error()
        }
    }
}
