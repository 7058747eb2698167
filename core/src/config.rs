//! Environment-derived configuration for the server and CLI.
//!
//! Everything comes from environment variables; there is no config file.
//! `OPENAI_API_KEY` is the only required variable, checked at startup so
//! a misconfigured deployment fails fast instead of on the first request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {message}")]
    InvalidVar { var: &'static str, message: String },
}

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Upstream text-generation endpoint settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// API key, sent as a bearer token.
    pub api_key: String,

    /// Endpoint base URL (override for compatible providers or mock servers).
    pub base_url: String,

    /// Model identifier passed through on every request.
    pub model: String,
}

/// Backing data-service probe settings. Optional: the probe endpoint
/// reports an error when this is left unconfigured.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KeepAliveConfig {
    /// Session-lookup URL of the data service, hit as-is with one GET.
    #[serde(default)]
    pub session_url: String,

    /// Service API key, sent as both `apikey` header and bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl KeepAliveConfig {
    /// Check if the probe has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.session_url.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openai: OpenAiConfig,
    pub keepalive: KeepAliveConfig,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = get("OPENAI_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                var: "PORT",
                message: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            openai: OpenAiConfig {
                api_key,
                base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
                model: get("SPECSKETCH_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            },
            keepalive: KeepAliveConfig {
                session_url: get("DATA_SERVICE_SESSION_URL").unwrap_or_default(),
                api_key: get("DATA_SERVICE_KEY").filter(|v| !v.is_empty()),
            },
        })
    }
}
