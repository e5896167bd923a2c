//! Process configuration, read once at startup from the environment.
//!
//! `load_env_files` mirrors the deploy layout: `.env.{RUST_ENV}` wins,
//! plain `.env` is the fallback.
use std::env;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub admin: AdminCredentialsConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin of the portfolio frontend allowed to send credentialed requests.
    pub frontend_url: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone)]
pub struct AdminCredentialsConfig {
    pub email: String,
    pub password: String,
}

// Keep the secret out of logs.
impl std::fmt::Debug for AdminCredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentialsConfig")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStoreKind {
    Memory,
    Redis,
}

impl FromStr for SessionStoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(SessionStoreKind::Memory),
            "redis" => Ok(SessionStoreKind::Redis),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub ttl_secs: i64,
    pub cookie_name: String,
    pub cookie_secure: bool,
    pub store: SessionStoreKind,
    pub redis_url: Option<String>,
}

impl SessionConfig {
    pub const DEFAULT_TTL_SECS: i64 = 24 * 60 * 60;
    pub const DEFAULT_COOKIE_NAME: &'static str = "portfolio.sid";
}

pub fn load_env_files() {
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so it can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let port = match get("PORT") {
            Some(raw) => parse(&raw, "PORT")?,
            None => 5000,
        };

        let server = ServerConfig {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            frontend_url: get("FRONTEND_URL")
                .unwrap_or_else(|| "http://localhost:5173".to_string()),
        };

        let database = DatabaseConfig {
            url: get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            max_connections: match get("DB_MAX_CONNECTIONS") {
                Some(raw) => parse(&raw, "DB_MAX_CONNECTIONS")?,
                None => 50,
            },
        };

        // The admin pair is compared verbatim, so it is not trimmed here.
        let admin = AdminCredentialsConfig {
            email: get("ADMIN_EMAIL").ok_or(ConfigError::Missing("ADMIN_EMAIL"))?,
            password: get("ADMIN_PASSWORD").ok_or(ConfigError::Missing("ADMIN_PASSWORD"))?,
        };

        let ttl_secs: i64 = match get("SESSION_TTL_SECS") {
            Some(raw) => parse(&raw, "SESSION_TTL_SECS")?,
            None => SessionConfig::DEFAULT_TTL_SECS,
        };
        if ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_SECS",
                value: ttl_secs.to_string(),
            });
        }

        let store = match get("SESSION_STORE") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "SESSION_STORE",
                value: raw.clone(),
            })?,
            None => SessionStoreKind::Memory,
        };

        let redis_url = get("REDIS_URL");
        if store == SessionStoreKind::Redis && redis_url.is_none() {
            return Err(ConfigError::Missing("REDIS_URL"));
        }

        let session = SessionConfig {
            ttl_secs,
            cookie_name: get("SESSION_COOKIE_NAME")
                .unwrap_or_else(|| SessionConfig::DEFAULT_COOKIE_NAME.to_string()),
            cookie_secure: environment == "production",
            store,
            redis_url,
        };

        Ok(Self {
            environment,
            server,
            database,
            admin,
            session,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse<T: FromStr>(raw: &str, key: &'static str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
