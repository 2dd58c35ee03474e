//! Authenticator implementation
//!
//! Applies the configured credential to outgoing transport requests.

use super::types::AuthConfig;
use crate::http::TransportRequest;

/// Authenticator handles applying authentication to requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Apply authentication to a request
    pub fn apply(&self, request: &mut TransportRequest) {
        match &self.config {
            AuthConfig::None => {}
            AuthConfig::ApiKey { name, value } => {
                request.headers.insert(name.clone(), value.clone());
            }
        }
    }
}
