use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::auth::application::{
    domain::entities::SessionRecord,
    ports::outgoing::session_store::{SessionStore, SessionStoreError},
};

/// Process-local session store.
///
/// Sessions do not survive a restart. Expired records are dropped on the next
/// `save`, or earlier when the current-session check meets one.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(
        &self,
        fingerprint: &str,
        record: &SessionRecord,
    ) -> Result<(), SessionStoreError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, existing| existing.is_active_at(now));
        sessions.insert(fingerprint.to_string(), record.clone());
        Ok(())
    }

    async fn find(&self, fingerprint: &str) -> Result<Option<SessionRecord>, SessionStoreError> {
        Ok(self.sessions.read().await.get(fingerprint).cloned())
    }

    async fn remove(&self, fingerprint: &str) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(fingerprint);
        Ok(())
    }

    async fn ping(&self) -> Result<(), SessionStoreError> {
        Ok(())
    }
}
