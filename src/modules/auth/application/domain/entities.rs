use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const TOKEN_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
}

/// The identity held by an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub email: String,
    pub role: AdminRole,
}

impl AdminIdentity {
    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: AdminRole::Admin,
        }
    }
}

/// Server-side session record.
///
/// Stored under the fingerprint of its token, never under the raw token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub is_authenticated: bool,
    pub user: AdminIdentity,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn authenticated(user: AdminIdentity, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            is_authenticated: true,
            user,
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    /// Expiry is absolute: a record stops being active at `expires_at`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.is_authenticated && now < self.expires_at
    }

    pub fn remaining_secs(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds()
    }
}

/// Opaque credential handed to the caller after a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn generate() -> Self {
        let value: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        Self(value)
    }

    #[cfg(test)]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn fingerprint(&self) -> String {
        token_fingerprint(&self.0)
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// SHA-256 hex digest used as the session store key.
pub fn token_fingerprint(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Result of a successful login: the credential plus the record it unlocks.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: SessionToken,
    pub record: SessionRecord,
}
