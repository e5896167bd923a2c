pub mod extractors;
pub mod routes;
pub mod session_cookie;

pub use session_cookie::SessionCookieConfig;
