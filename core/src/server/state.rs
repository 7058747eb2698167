//! Shared application state for the HTTP server.

use std::sync::Arc;

use crate::ai::client::ChatClient;
use crate::config::Config;

/// Shared state accessible by all handlers via axum's State extractor.
pub struct AppState {
    pub config: Config,
    pub chat: ChatClient,
    /// Plain client for the keep-alive probe.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let chat = ChatClient::with_base_url(
            config.openai.api_key.clone(),
            config.openai.base_url.clone(),
        );
        Self {
            config,
            chat,
            http: reqwest::Client::new(),
        }
    }
}

pub type SharedState = Arc<AppState>;
