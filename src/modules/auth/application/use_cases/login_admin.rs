use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::auth::application::domain::entities::{IssuedSession, SessionRecord, SessionToken};
use crate::auth::application::ports::outgoing::{CredentialVerifier, SessionStore};

// ========================= Login Request =========================
/// Submitted credential pair.
///
/// Deliberately unvalidated: the pair is compared verbatim, so trimming or
/// format checks here would change which pairs authenticate.
#[derive(Clone)]
pub struct LoginRequest {
    identifier: String,
    secret: String,
}

impl LoginRequest {
    pub fn new(identifier: String, secret: String) -> Self {
        Self { identifier, secret }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Session store error: {0}")]
    SessionStoreError(String),
}

// ============================ Login Admin Use Case =============================
#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<IssuedSession, LoginError>;
}

pub struct LoginAdminService<V>
where
    V: CredentialVerifier,
{
    verifier: V,
    sessions: Arc<dyn SessionStore + Send + Sync>,
    ttl: Duration,
}

impl<V> LoginAdminService<V>
where
    V: CredentialVerifier,
{
    pub fn new(verifier: V, sessions: Arc<dyn SessionStore + Send + Sync>, ttl: Duration) -> Self {
        Self {
            verifier,
            sessions,
            ttl,
        }
    }
}

#[async_trait]
impl<V> LoginAdminUseCase for LoginAdminService<V>
where
    V: CredentialVerifier + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<IssuedSession, LoginError> {
        let identity = self
            .verifier
            .verify(request.identifier(), request.secret())
            .ok_or(LoginError::InvalidCredentials)?;

        let token = SessionToken::generate();
        let record = SessionRecord::authenticated(identity, Utc::now(), self.ttl);

        self.sessions
            .save(&token.fingerprint(), &record)
            .await
            .map_err(|e| LoginError::SessionStoreError(e.to_string()))?;

        Ok(IssuedSession { token, record })
    }
}
