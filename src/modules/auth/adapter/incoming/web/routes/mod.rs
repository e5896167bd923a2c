mod current_session;
mod login_admin;
mod logout_admin;

pub use current_session::{current_session_handler, __path_current_session_handler, SessionStateResponse, SessionUserDto};
pub use login_admin::{login_admin_handler, __path_login_admin_handler, LoginRequestDto, LoginResponse};
pub use logout_admin::{logout_admin_handler, __path_logout_admin_handler, LogoutResponseBody};
