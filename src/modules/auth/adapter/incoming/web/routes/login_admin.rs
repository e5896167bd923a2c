use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::routes::{SessionStateResponse, SessionUserDto};
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from the admin console
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin@example.com")]
    pub email: String,

    #[schema(example = "admin123")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Opaque session token, also set as the session cookie
    token: String,
    #[schema(example = true)]
    is_authenticated: bool,
    user: SessionUserDto,
    expires_at: DateTime<Utc>,
}

/// Admin login
///
/// Exchanges the configured admin credentials for a session. The token is
/// returned in the body and set as an HttpOnly cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "token": "q8Xv3...",
                    "isAuthenticated": true,
                    "user": { "email": "admin@example.com", "role": "admin" },
                    "expiresAt": "2026-03-02T10:00:00Z"
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = LoginRequest::new(dto.email, dto.password);

    match data.auth.login.execute(request).await {
        Ok(issued) => {
            info!(email = %issued.record.user.email, "Admin logged in");

            let state = SessionStateResponse::from(&issued.record);
            let cookie = data.session_cookie.build(issued.token.as_str());

            ApiResponse::success_with_cookie(
                LoginResponse {
                    token: issued.token.as_str().to_string(),
                    is_authenticated: state.is_authenticated,
                    user: state.user,
                    expires_at: state.expires_at,
                },
                cookie,
            )
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::SessionStoreError(ref e)) => {
            error!(error = %e, "Failed to save session");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::IssuedSession;
    use crate::auth::application::use_cases::login_admin::LoginAdminUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockLoginStoreDown;

    #[async_trait]
    impl LoginAdminUseCase for MockLoginStoreDown {
        async fn execute(&self, _request: LoginRequest) -> Result<IssuedSession, LoginError> {
            Err(LoginError::SessionStoreError("redis down".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_login_success_sets_cookie() {
        // Arrange
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(login_admin_handler)).await;

        // Act
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "admin@example.com",
                "password": "admin123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "portfolio.sid")
            .expect("session cookie should be set");
        assert_eq!(cookie.http_only(), Some(true));
        let cookie_value = cookie.value().to_string();

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["isAuthenticated"], true);
        assert_eq!(body["data"]["user"]["email"], "admin@example.com");
        assert_eq!(body["data"]["user"]["role"], "admin");
        assert_eq!(body["data"]["token"], cookie_value);
    }

    #[actix_web::test]
    async fn test_login_wrong_password() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(login_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "admin@example.com",
                "password": "nope"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        assert!(resp.response().cookies().next().is_none());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_missing_field_is_validation_error() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(login_admin_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({ "email": "admin@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_login_store_failure() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginStoreDown)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(login_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "admin@example.com",
                "password": "admin123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
