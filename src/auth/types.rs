//! Auth configuration types

use std::fmt;

/// Header the marketplace API reads the key from
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-KEY";

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Static API key sent as a header on every request
    ApiKey {
        /// Header name
        name: String,
        /// The API key value
        value: String,
    },
}

impl AuthConfig {
    /// API key sent in the standard `X-API-KEY` header
    pub fn api_key(value: impl Into<String>) -> Self {
        Self::ApiKey {
            name: DEFAULT_API_KEY_HEADER.to_string(),
            value: value.into(),
        }
    }

    /// Check whether a credential is configured
    pub fn is_configured(&self) -> bool {
        match self {
            AuthConfig::None => false,
            AuthConfig::ApiKey { value, .. } => !value.is_empty(),
        }
    }
}

// Keys never reach logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::ApiKey { name, .. } => f
                .debug_struct("ApiKey")
                .field("name", name)
                .field("value", &"<redacted>")
                .finish(),
        }
    }
}
