use crate::auth::application::{
    domain::entities::AdminIdentity, ports::outgoing::credential_verifier::CredentialVerifier,
};

/// Admin credentials taken from configuration, checked by exact equality.
///
/// No trimming and no case folding. A hashed scheme can replace this type
/// behind `CredentialVerifier` without touching callers.
#[derive(Clone)]
pub struct ConfiguredCredentials {
    email: String,
    password: String,
}

impl ConfiguredCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for ConfiguredCredentials {
    fn verify(&self, identifier: &str, secret: &str) -> Option<AdminIdentity> {
        if identifier == self.email && secret == self.password {
            Some(AdminIdentity::admin(self.email.clone()))
        } else {
            None
        }
    }
}
