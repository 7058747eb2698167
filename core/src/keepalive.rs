//! Liveness probe for the backing data service.
//!
//! Unrelated to the generation path: hosted data services pause projects
//! that see no traffic, so this issues one lightweight session lookup to
//! register activity. Wired to its own endpoint and safe to leave
//! unconfigured.

use serde::Serialize;
use thiserror::Error;

use crate::config::KeepAliveConfig;

#[derive(Error, Debug)]
pub enum KeepAliveError {
    #[error("keep-alive is not configured (set DATA_SERVICE_SESSION_URL)")]
    NotConfigured,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("data service answered with status {status}")]
    Status { status: u16 },
}

/// Outcome reported by the keep-alive endpoint.
#[derive(Debug, Serialize)]
pub struct KeepAliveReport {
    pub status: &'static str,
    pub timestamp: String,
    pub message: String,
}

impl KeepAliveReport {
    pub fn alive() -> Self {
        Self {
            status: "alive",
            timestamp: chrono::Utc::now().to_rfc3339(),
            message: "Data service checked successfully".to_owned(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            timestamp: chrono::Utc::now().to_rfc3339(),
            message: message.into(),
        }
    }
}

/// Exercise the data service's session lookup once.
///
/// Any 2xx answer counts as alive; everything else is an error. The probe
/// ignores the response body since only the round trip matters.
pub async fn probe_session(
    http: &reqwest::Client,
    config: &KeepAliveConfig,
) -> Result<(), KeepAliveError> {
    if !config.is_configured() {
        return Err(KeepAliveError::NotConfigured);
    }

    let mut request = http.get(&config.session_url);
    if let Some(key) = &config.api_key {
        request = request.header("apikey", key).bearer_auth(key);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(KeepAliveError::Status {
            status: status.as_u16(),
        });
    }

    Ok(())
}
