use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperiencesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List experiences
///
/// Public read used by the experience timeline.
#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "experience",
    responses(
        (status = 200, description = "All experiences", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/experience")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.get_list.execute().await {
        Ok(experiences) => ApiResponse::success(experiences),

        Err(GetExperiencesError::RepositoryError(e)) => {
            error!("Repository error listing experiences: {}", e);
            ApiResponse::internal_error()
        }
    }
}
