//! API configuration

use serde::Deserialize;

use domain_dispatch::DispatchApiConfig;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// External dispatch API settings
    pub dispatch: DispatchConfig,
}

/// Connection settings for the external dispatch API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Base URL of the dispatch API
    pub base_url: String,
    /// OAuth token
    pub token: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Accept-Language header value for localized status texts
    pub accept_language: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            dispatch: DispatchConfig::default(),
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        let defaults = DispatchApiConfig::default();
        Self {
            base_url: defaults.base_url,
            token: defaults.token,
            timeout_secs: defaults.timeout_secs,
            accept_language: defaults.accept_language,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// Variables use the `API_` prefix with `__` separating nesting levels,
    /// e.g. `API_DISPATCH__TOKEN` sets the dispatch token.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DispatchConfig {
    /// Converts to the adapter-level configuration
    pub fn to_adapter_config(&self) -> DispatchApiConfig {
        DispatchApiConfig {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            timeout_secs: self.timeout_secs,
            accept_language: self.accept_language.clone(),
        }
    }
}
