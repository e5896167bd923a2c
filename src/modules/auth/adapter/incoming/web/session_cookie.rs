use actix_web::cookie::{time::Duration, Cookie, SameSite};

use crate::config::SessionConfig;

/// How the session credential is carried back to the browser.
#[derive(Debug, Clone)]
pub struct SessionCookieConfig {
    pub name: String,
    pub secure: bool,
    pub ttl_secs: i64,
}

impl SessionCookieConfig {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            secure: config.cookie_secure,
            ttl_secs: config.ttl_secs,
        }
    }

    /// Cookie carrying a freshly issued token.
    pub fn build(&self, token: &str) -> Cookie<'static> {
        Cookie::build(self.name.clone(), token.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::seconds(self.ttl_secs))
            .finish()
    }

    /// Expired, empty cookie that clears the credential client-side.
    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.name.clone(), "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            name: SessionConfig::DEFAULT_COOKIE_NAME.to_string(),
            secure: false,
            ttl_secs: SessionConfig::DEFAULT_TTL_SECS,
        }
    }
}
