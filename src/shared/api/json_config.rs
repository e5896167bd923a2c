// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{self, JsonConfig};
use actix_web::HttpResponse;

/// Malformed or mistyped request bodies surface as `VALIDATION_ERROR`
/// instead of actix's plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::validation_error(&message),
        )
        .into()
    })
}

/// JSON body taken by gated handlers.
///
/// Extracted as a `Result` so a bad body never answers ahead of the
/// `AdminSession` extractor polled beside it.
pub type JsonBody<T> = Result<web::Json<T>, actix_web::Error>;

pub fn json_body<T>(body: JsonBody<T>) -> Result<T, HttpResponse> {
    body.map(web::Json::into_inner)
        .map_err(|e| ApiResponse::validation_error(&e.to_string()))
}
