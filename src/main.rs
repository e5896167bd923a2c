pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::certification;
pub use modules::contact;
pub use modules::experience;
pub use modules::project;
pub use modules::skill;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::SessionCookieConfig;
use crate::auth::adapter::outgoing::security::ConfiguredCredentials;
use crate::auth::adapter::outgoing::{InMemorySessionStore, RedisSessionStore};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::SessionStore;
use crate::auth::application::use_cases::{
    current_session::CurrentSessionService, login_admin::LoginAdminService,
    logout_admin::LogoutAdminService,
};
use crate::certification::adapter::outgoing::CertificationRepositoryPostgres;
use crate::certification::application::certification_use_cases::CertificationUseCases;
use crate::certification::application::service::{
    CreateCertificationService, DeleteCertificationService, GetCertificationsService,
    UpdateCertificationService,
};
use crate::config::{load_env_files, AppConfig, SessionStoreKind};
use crate::contact::adapter::outgoing::ContactMessageRepositoryPostgres;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::service::{
    CreateContactMessageService, DeleteContactMessageService, GetContactMessagesService,
};
use crate::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::service::{
    CreateExperienceService, DeleteExperienceService, GetExperiencesService,
    UpdateExperienceService,
};
use crate::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, UpdateProjectService,
};
use crate::shared::api::custom_json_config;
use crate::skill::adapter::outgoing::SkillRepositoryPostgres;
use crate::skill::application::service::{
    CreateSkillService, DeleteSkillService, GetSkillsService, UpdateSkillService,
};
use crate::skill::application::skill_use_cases::SkillUseCases;

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config as RedisConfig, Runtime};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub experience: ExperienceUseCases,
    pub skill: SkillUseCases,
    pub certification: CertificationUseCases,
    pub contact: ContactUseCases,
    pub auth: AuthUseCases,
    pub session_cookie: SessionCookieConfig,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(environment = %config.environment, "Starting portfolio backend");

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(10.min(config.database.max_connections))
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc: Arc<DatabaseConnection> = Arc::new(conn);

    // Session store
    let session_store: Arc<dyn SessionStore + Send + Sync> = match config.session.store {
        SessionStoreKind::Memory => {
            info!("Using in-memory session store");
            Arc::new(InMemorySessionStore::new())
        }
        SessionStoreKind::Redis => {
            let redis_url = config
                .session
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set")?;
            let pool = RedisConfig::from_url(redis_url)
                .create_pool(Some(Runtime::Tokio1))
                .context("Failed to create Redis pool")?;
            info!("Using Redis session store");
            Arc::new(RedisSessionStore::new(Arc::new(pool)))
        }
    };

    let state = build_app_state(&config, Arc::clone(&db_arc), Arc::clone(&session_store));

    let bind_address = config.bind_address();
    let frontend_url = config.server.frontend_url.clone();
    info!(%bind_address, "Server listening");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&frontend_url)
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&session_store)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {bind_address}"))?
    .run()
    .await
    .context("Server error")
}

#[cfg(not(tarpaulin_include))]
fn build_app_state(
    config: &AppConfig,
    db: Arc<DatabaseConnection>,
    session_store: Arc<dyn SessionStore + Send + Sync>,
) -> AppState {
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db));
    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db));
    let certification_repo = CertificationRepositoryPostgres::new(Arc::clone(&db));
    let contact_repo = ContactMessageRepositoryPostgres::new(db);

    let credentials = ConfiguredCredentials::new(
        config.admin.email.clone(),
        config.admin.password.clone(),
    );
    let ttl = chrono::Duration::seconds(config.session.ttl_secs);

    AppState {
        project: ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(project_repo.clone())),
            create: Arc::new(CreateProjectService::new(project_repo.clone())),
            update: Arc::new(UpdateProjectService::new(project_repo.clone())),
            delete: Arc::new(DeleteProjectService::new(project_repo)),
        },
        experience: ExperienceUseCases {
            get_list: Arc::new(GetExperiencesService::new(experience_repo.clone())),
            create: Arc::new(CreateExperienceService::new(experience_repo.clone())),
            update: Arc::new(UpdateExperienceService::new(experience_repo.clone())),
            delete: Arc::new(DeleteExperienceService::new(experience_repo)),
        },
        skill: SkillUseCases {
            get_list: Arc::new(GetSkillsService::new(skill_repo.clone())),
            create: Arc::new(CreateSkillService::new(skill_repo.clone())),
            update: Arc::new(UpdateSkillService::new(skill_repo.clone())),
            delete: Arc::new(DeleteSkillService::new(skill_repo)),
        },
        certification: CertificationUseCases {
            get_list: Arc::new(GetCertificationsService::new(certification_repo.clone())),
            create: Arc::new(CreateCertificationService::new(certification_repo.clone())),
            update: Arc::new(UpdateCertificationService::new(certification_repo.clone())),
            delete: Arc::new(DeleteCertificationService::new(certification_repo)),
        },
        contact: ContactUseCases {
            get_list: Arc::new(GetContactMessagesService::new(contact_repo.clone())),
            create: Arc::new(CreateContactMessageService::new(contact_repo.clone())),
            delete: Arc::new(DeleteContactMessageService::new(contact_repo)),
        },
        auth: AuthUseCases {
            login: Arc::new(LoginAdminService::new(
                credentials,
                Arc::clone(&session_store),
                ttl,
            )),
            current_session: Arc::new(CurrentSessionService::new(Arc::clone(&session_store))),
            logout: Arc::new(LogoutAdminService::new(session_store)),
        },
        session_cookie: SessionCookieConfig::from_config(&config.session),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_session_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Experience
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Certifications
    cfg.service(crate::certification::adapter::incoming::web::routes::get_certifications_handler);
    cfg.service(crate::certification::adapter::incoming::web::routes::create_certification_handler);
    cfg.service(crate::certification::adapter::incoming::web::routes::update_certification_handler);
    cfg.service(crate::certification::adapter::incoming::web::routes::delete_certification_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::get_contact_messages_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::create_contact_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::delete_contact_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!("Error starting app: {e:#}");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
