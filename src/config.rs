//! Runtime configuration
//!
//! Settings are read from the environment once at startup.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub const API_KEY_VAR: &str = "UNIT_CONVERTER_API_KEY";
pub const API_BASE_URL_VAR: &str = "UNIT_CONVERTER_API_BASE_URL";
pub const HTTP_TIMEOUT_VAR: &str = "UNIT_CONVERTER_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive whole number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    EmptyBaseUrl { var: &'static str },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Exchange-rate API settings
#[derive(Clone)]
pub struct CurrencyConfig {
    /// API key; currency conversions fail until one is set
    pub api_key: Option<String>,
    /// Base URL without trailing slash
    pub base_url: String,
    /// Upper bound on a single HTTP request
    pub timeout: Duration,
}

impl CurrencyConfig {
    /// Load from process environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let base_url = match lookup(API_BASE_URL_VAR) {
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if url.is_empty() {
                    return Err(ConfigError::EmptyBaseUrl { var: API_BASE_URL_VAR });
                }
                url
            }
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let timeout_secs = match lookup(HTTP_TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: HTTP_TIMEOUT_VAR,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

// Keeps the key out of logs and status output
impl fmt::Debug for CurrencyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
