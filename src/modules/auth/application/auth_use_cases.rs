use std::sync::Arc;

use crate::auth::application::use_cases::{
    current_session::CurrentSessionUseCase, login_admin::LoginAdminUseCase,
    logout_admin::LogoutAdminUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub current_session: Arc<dyn CurrentSessionUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutAdminUseCase + Send + Sync>,
}
