pub mod credential_verifier;
pub mod session_store;

pub use credential_verifier::CredentialVerifier;
pub use session_store::{SessionStore, SessionStoreError};
