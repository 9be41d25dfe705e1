use std::fmt::{Debug, Formatter};

use reqcall_core::utils::Redact;

/// Config carries all the configuration for calling the API.
///
/// Supplied once at client construction and never mutated afterwards.
#[derive(Clone, Default)]
pub struct Config {
    /// Numeric user identifier, the left half of the Authorization value.
    pub user_id: u64,
    /// Shared secret used as the HMAC key. Never logged.
    pub secret: String,
    /// Base API URL, e.g. `https://api.local`. Joined with the endpoint
    /// path as-is, without trailing slash normalization.
    pub api_url: String,
    /// API contract version. Versions 1, 2 and 3 are supported.
    pub api_version: u32,
    /// Authorization realm label, e.g. `REALM`.
    pub realm: String,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user_id
    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Set secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Set api_url
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set api_version
    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    /// Set realm
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = realm.into();
        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("user_id", &self.user_id)
            .field("secret", &Redact::from(&self.secret))
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("realm", &self.realm)
            .finish()
    }
}
