use crate::auth::application::{
    domain::entities::SessionRecord,
    ports::outgoing::session_store::{SessionStore, SessionStoreError},
};
use async_trait::async_trait;
use chrono::Utc;
use deadpool_redis::Pool;

use std::sync::Arc;

/// Redis-backed implementation of `SessionStore`.
///
/// ## Redis data model
///
/// ```text
/// portfolio:session:{fingerprint} -> "{json SessionRecord}"
/// ```
/// - The key holds the SHA-256 fingerprint of the token, never the token
/// - TTL = seconds left until `expires_at`
///
/// Redis TTL handles cleanup. The record still carries `expires_at`, so a
/// key that outlives its TTL by clock skew is rejected by the read path.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Arc<Pool>,
}

impl RedisSessionStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(fingerprint: &str) -> String {
        format!("portfolio:session:{fingerprint}")
    }

    /// Helper to get a connection from the pool
    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionStoreError::Unavailable(format!("Pool error: {}", e)))
    }
}

fn encode(record: &SessionRecord) -> Result<String, SessionStoreError> {
    serde_json::to_string(record).map_err(|e| SessionStoreError::Corrupted(e.to_string()))
}

fn decode(raw: &str) -> Result<SessionRecord, SessionStoreError> {
    serde_json::from_str(raw).map_err(|e| SessionStoreError::Corrupted(e.to_string()))
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    /// Persist a session record.
    ///
    /// ## Redis operation
    /// ```text
    /// SET portfolio:session:{fp} "{json}" EX <ttl>
    /// ```
    ///
    /// A record that is already expired is not written.
    async fn save(
        &self,
        fingerprint: &str,
        record: &SessionRecord,
    ) -> Result<(), SessionStoreError> {
        let ttl = record.remaining_secs(Utc::now());
        if ttl <= 0 {
            return Ok(());
        }

        let payload = encode(record)?;
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::cmd("SET")
            .arg(Self::session_key(fingerprint))
            .arg(payload)
            .arg("EX")
            .arg(ttl)
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))
    }

    /// Look up a session record.
    ///
    /// ## Redis operation
    /// ```text
    /// GET portfolio:session:{fp}
    /// ```
    async fn find(&self, fingerprint: &str) -> Result<Option<SessionRecord>, SessionStoreError> {
        let mut conn = self.get_conn().await?;

        let raw: Option<String> = deadpool_redis::redis::cmd("GET")
            .arg(Self::session_key(fingerprint))
            .query_async(&mut *conn)
            .await
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?;

        raw.as_deref().map(decode).transpose()
    }

    /// Delete a session record. Missing keys are not an error.
    ///
    /// ## Redis operation
    /// ```text
    /// DEL portfolio:session:{fp}
    /// ```
    async fn remove(&self, fingerprint: &str) -> Result<(), SessionStoreError> {
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::cmd("DEL")
            .arg(Self::session_key(fingerprint))
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))
    }

    async fn ping(&self) -> Result<(), SessionStoreError> {
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map(|_| ())
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::AdminIdentity;
    use chrono::Duration;

    #[test]
    fn session_key_is_namespaced_by_fingerprint() {
        assert_eq!(
            RedisSessionStore::session_key("abc123"),
            "portfolio:session:abc123"
        );
    }

    #[test]
    fn stored_payload_decodes_to_same_record() {
        let record = SessionRecord::authenticated(
            AdminIdentity::admin("admin@example.com"),
            Utc::now(),
            Duration::hours(24),
        );

        let raw = encode(&record).unwrap();
        assert_eq!(decode(&raw).unwrap(), record);
    }

    #[test]
    fn garbage_payload_is_reported_as_corrupted() {
        let result = decode("not json");
        assert!(matches!(result, Err(SessionStoreError::Corrupted(_))));
    }
}
