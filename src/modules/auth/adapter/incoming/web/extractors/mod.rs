mod auth;

pub use auth::{extract_session_token, AdminSession};
