use chrono::{Duration, Utc};

use crate::auth::application::domain::entities::{AdminIdentity, SessionRecord, SessionToken};
use crate::auth::application::ports::outgoing::SessionStore;
use crate::tests::support::app_state_builder::TestAppStateBuilder;

pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";
pub const TEST_ADMIN_PASSWORD: &str = "admin123";

/// Stores a live session in the builder's store and returns its raw token.
pub async fn issue_test_session(builder: &TestAppStateBuilder) -> String {
    issue_session_issued_at(builder, Utc::now()).await
}

/// Stores a session that expired one second ago.
pub async fn issue_expired_session(builder: &TestAppStateBuilder) -> String {
    issue_session_issued_at(builder, Utc::now() - Duration::hours(24) - Duration::seconds(1)).await
}

async fn issue_session_issued_at(
    builder: &TestAppStateBuilder,
    issued_at: chrono::DateTime<Utc>,
) -> String {
    let token = SessionToken::generate();
    let record = SessionRecord::authenticated(
        AdminIdentity::admin(TEST_ADMIN_EMAIL),
        issued_at,
        Duration::hours(24),
    );

    builder
        .session_store()
        .save(&token.fingerprint(), &record)
        .await
        .unwrap();

    token.as_str().to_string()
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
