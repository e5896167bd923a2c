use crate::auth::application::domain::entities::AdminIdentity;

/// Checks a submitted (identifier, secret) pair.
///
/// Returns the identity the pair authenticates as, or `None` on mismatch.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, identifier: &str, secret: &str) -> Option<AdminIdentity>;
}
