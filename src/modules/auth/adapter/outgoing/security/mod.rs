mod configured_credentials;

pub use configured_credentials::ConfiguredCredentials;
