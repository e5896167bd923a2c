use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List skills
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    responses(
        (status = 200, description = "All skills", body = inline(SuccessResponse<Vec<Skill>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get_list.execute().await {
        Ok(skills) => ApiResponse::success(skills),

        Err(GetSkillsError::RepositoryError(e)) => {
            error!("Repository error listing skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}
