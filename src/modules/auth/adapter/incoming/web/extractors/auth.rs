use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::error;

use crate::auth::application::domain::entities::SessionRecord;
use crate::auth::application::use_cases::current_session::CurrentSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A request that carries a live admin session.
///
/// Taking this as a handler argument gates the handler: without a valid
/// session the request is answered with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub session: SessionRecord,
}

impl AdminSession {
    pub fn email(&self) -> &str {
        &self.session.user.email
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn unauthorized() -> ActixError {
    create_api_error(ApiResponse::unauthorized(
        "UNAUTHORIZED",
        "Authentication required",
    ))
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let data = match req.app_data::<web::Data<AppState>>() {
            Some(data) => data.clone(),
            None => {
                return Box::pin(async { Err(create_api_error(ApiResponse::internal_error())) });
            }
        };

        let token = extract_session_token(req, &data.session_cookie.name);

        Box::pin(async move {
            let token = token.ok_or_else(unauthorized)?;

            match data.auth.current_session.execute(&token).await {
                Ok(session) => Ok(AdminSession { session }),
                Err(CurrentSessionError::Unauthenticated) => Err(unauthorized()),
                Err(CurrentSessionError::SessionStoreError(ref e)) => {
                    error!(error = %e, "Session lookup failed");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

/// Credential presented by the caller: session cookie first, then
/// `Authorization: Bearer`. Empty values count as absent.
pub fn extract_session_token(req: &HttpRequest, cookie_name: &str) -> Option<String> {
    if let Some(cookie) = req.cookie(cookie_name) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
}
