use std::sync::Arc;

use actix_web::web;
use chrono::Duration;

use crate::auth::adapter::incoming::web::SessionCookieConfig;
use crate::auth::adapter::outgoing::security::ConfiguredCredentials;
use crate::auth::adapter::outgoing::InMemorySessionStore;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::current_session::{
    CurrentSessionService, CurrentSessionUseCase,
};
use crate::auth::application::use_cases::login_admin::{LoginAdminService, LoginAdminUseCase};
use crate::auth::application::use_cases::logout_admin::{LogoutAdminService, LogoutAdminUseCase};
use crate::certification::application::certification_use_cases::CertificationUseCases;
use crate::certification::application::domain::entities::{Certification, CertificationFields};
use crate::certification::application::ports::incoming::use_cases::GetCertificationsUseCase;
use crate::certification::application::service::{
    CreateCertificationService, DeleteCertificationService, GetCertificationsService,
    UpdateCertificationService,
};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::domain::entities::{ContactMessage, ContactMessageFields};
use crate::contact::application::service::{
    CreateContactMessageService, DeleteContactMessageService, GetContactMessagesService,
};
use crate::experience::application::domain::entities::{Experience, ExperienceFields};
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::ports::incoming::use_cases::GetExperiencesUseCase;
use crate::experience::application::service::{
    CreateExperienceService, DeleteExperienceService, GetExperiencesService,
    UpdateExperienceService,
};
use crate::project::application::domain::entities::{Project, ProjectFields};
use crate::project::application::ports::incoming::use_cases::GetProjectsUseCase;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, UpdateProjectService,
};
use crate::skill::application::domain::entities::{Skill, SkillFields};
use crate::skill::application::service::{
    CreateSkillService, DeleteSkillService, GetSkillsService, UpdateSkillService,
};
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::tests::support::auth_helper::{TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD};
use crate::tests::support::in_memory_repositories::{
    InMemoryCertificationRepository, InMemoryContactMessageRepository,
    InMemoryExperienceRepository, InMemoryProjectRepository, InMemorySkillRepository,
};
use crate::AppState;

/// Builds an `AppState` wired to real services over in-memory stores.
///
/// Individual use cases can be swapped for failing doubles with the
/// `with_*` methods.
pub struct TestAppStateBuilder {
    projects: InMemoryProjectRepository,
    experiences: InMemoryExperienceRepository,
    skills: InMemorySkillRepository,
    certifications: InMemoryCertificationRepository,
    contact_messages: InMemoryContactMessageRepository,
    sessions: InMemorySessionStore,
    get_projects: Option<Arc<dyn GetProjectsUseCase + Send + Sync>>,
    get_experiences: Option<Arc<dyn GetExperiencesUseCase + Send + Sync>>,
    get_certifications: Option<Arc<dyn GetCertificationsUseCase + Send + Sync>>,
    login: Option<Arc<dyn LoginAdminUseCase + Send + Sync>>,
    current_session: Option<Arc<dyn CurrentSessionUseCase + Send + Sync>>,
    logout: Option<Arc<dyn LogoutAdminUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            projects: InMemoryProjectRepository::default(),
            experiences: InMemoryExperienceRepository::default(),
            skills: InMemorySkillRepository::default(),
            certifications: InMemoryCertificationRepository::default(),
            contact_messages: InMemoryContactMessageRepository::default(),
            sessions: InMemorySessionStore::new(),
            get_projects: None,
            get_experiences: None,
            get_certifications: None,
            login: None,
            current_session: None,
            logout: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.get_projects = Some(Arc::new(uc));
        self
    }

    pub fn with_get_experiences(
        mut self,
        uc: impl GetExperiencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_experiences = Some(Arc::new(uc));
        self
    }

    pub fn with_get_certifications(
        mut self,
        uc: impl GetCertificationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_certifications = Some(Arc::new(uc));
        self
    }

    pub fn with_login(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login = Some(Arc::new(uc));
        self
    }

    pub fn with_current_session(
        mut self,
        uc: impl CurrentSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.current_session = Some(Arc::new(uc));
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutAdminUseCase + Send + Sync + 'static) -> Self {
        self.logout = Some(Arc::new(uc));
        self
    }

    // ------------------------------------------------------------------
    // Handles onto the shared stores (clones share state)
    // ------------------------------------------------------------------

    pub fn session_store(&self) -> InMemorySessionStore {
        self.sessions.clone()
    }

    pub fn project_repository(&self) -> InMemoryProjectRepository {
        self.projects.clone()
    }

    pub fn experience_repository(&self) -> InMemoryExperienceRepository {
        self.experiences.clone()
    }

    pub fn skill_repository(&self) -> InMemorySkillRepository {
        self.skills.clone()
    }

    pub fn certification_repository(&self) -> InMemoryCertificationRepository {
        self.certifications.clone()
    }

    pub fn contact_repository(&self) -> InMemoryContactMessageRepository {
        self.contact_messages.clone()
    }

    // ------------------------------------------------------------------
    // Seeding
    // ------------------------------------------------------------------

    pub async fn seed_project(&self, fields: ProjectFields) -> Project {
        self.projects.seed(fields)
    }

    pub async fn seed_experience(&self, fields: ExperienceFields) -> Experience {
        self.experiences.seed(fields)
    }

    pub async fn seed_skill(&self, fields: SkillFields) -> Skill {
        self.skills.seed(fields)
    }

    pub async fn seed_certification(&self, fields: CertificationFields) -> Certification {
        self.certifications.seed(fields)
    }

    pub async fn seed_contact_message(&self, fields: ContactMessageFields) -> ContactMessage {
        self.contact_messages.seed(fields)
    }

    pub fn build(self) -> web::Data<AppState> {
        let projects = self.projects;
        let experiences = self.experiences;
        let skills = self.skills;
        let certifications = self.certifications;
        let inbox = self.contact_messages;
        let sessions = Arc::new(self.sessions);

        let state = AppState {
            project: ProjectUseCases {
                get_list: self
                    .get_projects
                    .unwrap_or_else(|| Arc::new(GetProjectsService::new(projects.clone()))),
                create: Arc::new(CreateProjectService::new(projects.clone())),
                update: Arc::new(UpdateProjectService::new(projects.clone())),
                delete: Arc::new(DeleteProjectService::new(projects)),
            },
            experience: ExperienceUseCases {
                get_list: self
                    .get_experiences
                    .unwrap_or_else(|| Arc::new(GetExperiencesService::new(experiences.clone()))),
                create: Arc::new(CreateExperienceService::new(experiences.clone())),
                update: Arc::new(UpdateExperienceService::new(experiences.clone())),
                delete: Arc::new(DeleteExperienceService::new(experiences)),
            },
            skill: SkillUseCases {
                get_list: Arc::new(GetSkillsService::new(skills.clone())),
                create: Arc::new(CreateSkillService::new(skills.clone())),
                update: Arc::new(UpdateSkillService::new(skills.clone())),
                delete: Arc::new(DeleteSkillService::new(skills)),
            },
            certification: CertificationUseCases {
                get_list: self.get_certifications.unwrap_or_else(|| {
                    Arc::new(GetCertificationsService::new(certifications.clone()))
                }),
                create: Arc::new(CreateCertificationService::new(certifications.clone())),
                update: Arc::new(UpdateCertificationService::new(certifications.clone())),
                delete: Arc::new(DeleteCertificationService::new(certifications)),
            },
            contact: ContactUseCases {
                get_list: Arc::new(GetContactMessagesService::new(inbox.clone())),
                create: Arc::new(CreateContactMessageService::new(inbox.clone())),
                delete: Arc::new(DeleteContactMessageService::new(inbox)),
            },
            auth: AuthUseCases {
                login: self.login.unwrap_or_else(|| {
                    Arc::new(LoginAdminService::new(
                        ConfiguredCredentials::new(TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD),
                        sessions.clone(),
                        Duration::hours(24),
                    ))
                }),
                current_session: self
                    .current_session
                    .unwrap_or_else(|| Arc::new(CurrentSessionService::new(sessions.clone()))),
                logout: self
                    .logout
                    .unwrap_or_else(|| Arc::new(LogoutAdminService::new(sessions))),
            },
            session_cookie: SessionCookieConfig::default(),
        };

        web::Data::new(state)
    }
}
