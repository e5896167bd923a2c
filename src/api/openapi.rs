use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LogoutResponseBody, SessionStateResponse, SessionUserDto,
};
use crate::certification::adapter::incoming::web::routes::CertificationRequest;
use crate::certification::application::domain::entities::Certification;
use crate::contact::adapter::incoming::web::routes::ContactMessageRequest;
use crate::contact::application::domain::entities::ContactMessage;
use crate::experience::adapter::incoming::web::routes::ExperienceRequest;
use crate::experience::application::domain::entities::Experience;
use crate::project::adapter::incoming::web::routes::ProjectRequest;
use crate::project::application::domain::entities::Project;
use crate::skill::adapter::incoming::web::routes::SkillRequest;
use crate::skill::application::domain::entities::{Skill, SkillCategory};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content and admin session API for the portfolio site"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::current_session_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,

        // Project endpoints
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::create_project_handler,
        crate::project::adapter::incoming::web::routes::update_project_handler,
        crate::project::adapter::incoming::web::routes::delete_project_handler,

        // Experience endpoints
        crate::experience::adapter::incoming::web::routes::get_experiences_handler,
        crate::experience::adapter::incoming::web::routes::create_experience_handler,
        crate::experience::adapter::incoming::web::routes::update_experience_handler,
        crate::experience::adapter::incoming::web::routes::delete_experience_handler,

        // Skill endpoints
        crate::skill::adapter::incoming::web::routes::get_skills_handler,
        crate::skill::adapter::incoming::web::routes::create_skill_handler,
        crate::skill::adapter::incoming::web::routes::update_skill_handler,
        crate::skill::adapter::incoming::web::routes::delete_skill_handler,

        // Certification endpoints
        crate::certification::adapter::incoming::web::routes::get_certifications_handler,
        crate::certification::adapter::incoming::web::routes::create_certification_handler,
        crate::certification::adapter::incoming::web::routes::update_certification_handler,
        crate::certification::adapter::incoming::web::routes::delete_certification_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::get_contact_messages_handler,
        crate::contact::adapter::incoming::web::routes::create_contact_message_handler,
        crate::contact::adapter::incoming::web::routes::delete_contact_message_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            LogoutResponseBody,
            SessionStateResponse,
            SessionUserDto,

            // Content
            Project,
            ProjectRequest,
            Experience,
            ExperienceRequest,
            Skill,
            SkillCategory,
            SkillRequest,
            Certification,
            CertificationRequest,
            ContactMessage,
            ContactMessageRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "projects", description = "Projects gallery"),
        (name = "experience", description = "Experience timeline"),
        (name = "skills", description = "Skills grid"),
        (name = "certifications", description = "Certifications"),
        (name = "contact", description = "Contact form and inbox"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "portfolio.sid",
                    "Session cookie set by /api/auth/login",
                ))),
            );
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Session token returned by /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
