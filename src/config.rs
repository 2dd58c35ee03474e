//! Client configuration
//!
//! Loaded from YAML, from the environment, or from a file overlaid with the
//! environment:
//!
//! ```yaml
//! api_key: your-key
//! network: mainnet
//! timeout_secs: 30
//! event_page_size: 300
//! order_page_size: 50
//! max_pages: 200
//! ```

use crate::api::{ClientSettings, OpenseaClient, DEFAULT_EVENT_LIMIT, DEFAULT_ORDER_LIMIT};
use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, HttpTransport};
use crate::pagination::PaginationLimits;
use crate::types::Network;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// API key variable
pub const ENV_API_KEY: &str = "OPENSEA_API_KEY";
/// Network variable (`mainnet` or `rinkeby`)
pub const ENV_NETWORK: &str = "OPENSEA_NETWORK";
/// Base URL override variable
pub const ENV_BASE_URL: &str = "OPENSEA_BASE_URL";
/// Forwarding proxy variable
pub const ENV_PROXY: &str = "OPENSEA_PROXY";

/// Everything needed to build an [`OpenseaClient`]
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub network: Network,

    /// Overrides the network's base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// Forwarding proxy receiving every request
    #[serde(default)]
    pub proxy: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub user_agent: Option<String>,

    #[serde(default = "default_event_page_size")]
    pub event_page_size: u32,

    #[serde(default = "default_order_page_size")]
    pub order_page_size: u32,

    #[serde(default)]
    pub max_pages: Option<u32>,

    #[serde(default)]
    pub max_duration_secs: Option<u64>,

    /// Pause between consecutive pages, in milliseconds
    #[serde(default)]
    pub page_delay_ms: Option<u64>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_event_page_size() -> u32 {
    DEFAULT_EVENT_LIMIT
}

fn default_order_page_size() -> u32 {
    DEFAULT_ORDER_LIMIT
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            network: Network::default(),
            base_url: None,
            proxy: None,
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            event_page_size: default_event_page_size(),
            order_page_size: default_order_page_size(),
            max_pages: None,
            max_duration_secs: None,
            page_delay_ms: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("network", &self.network)
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("event_page_size", &self.event_page_size)
            .field("order_page_size", &self.order_page_size)
            .field("max_pages", &self.max_pages)
            .field("max_duration_secs", &self.max_duration_secs)
            .field("page_delay_ms", &self.page_delay_ms)
            .finish()
    }
}

impl ClientConfig {
    /// Parse a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;
        Ok(config)
    }

    /// Read a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.merge_env()?;
        Ok(config)
    }

    /// Overlay the process environment on this config
    pub fn merge_env(&mut self) -> Result<()> {
        self.merge_vars(|name| std::env::var(name).ok())
    }

    /// Overlay values from `lookup`; unset and empty variables are ignored
    pub fn merge_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = key;
        }
        if let Some(network) = lookup(ENV_NETWORK) {
            self.network = network.parse()?;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = Some(base_url);
        }
        if let Some(proxy) = lookup(ENV_PROXY) {
            self.proxy = Some(proxy);
        }
        Ok(())
    }

    /// Reject configs that cannot produce a working client
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        if self.event_page_size == 0 {
            return Err(Error::config("event_page_size must be greater than zero"));
        }
        if self.order_page_size == 0 {
            return Err(Error::config("order_page_size must be greater than zero"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        if let Some(base_url) = &self.base_url {
            url::Url::parse(base_url)?;
        }
        if let Some(proxy) = &self.proxy {
            url::Url::parse(proxy)?;
        }
        Ok(())
    }

    /// Effective base URL
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.network.base_url())
    }

    /// Transport configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url())
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(proxy.as_str());
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        builder.build()
    }

    /// Paging defaults and guards
    pub fn settings(&self) -> ClientSettings {
        ClientSettings {
            event_page_size: self.event_page_size,
            order_page_size: self.order_page_size,
            limits: PaginationLimits {
                max_pages: self.max_pages,
                max_duration: self.max_duration_secs.map(Duration::from_secs),
                page_delay: self.page_delay_ms.map(Duration::from_millis),
            },
        }
    }

    /// Validate and build a client over the reqwest transport
    pub fn build_client(&self) -> Result<OpenseaClient> {
        self.validate()?;
        let transport = HttpTransport::with_config(self.http_config())?;
        let client =
            OpenseaClient::with_transport(Arc::new(transport), AuthConfig::api_key(&self.api_key))
                .with_settings(self.settings());
        Ok(client)
    }
}
