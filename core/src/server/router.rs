//! Router construction with all route groups.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::handlers::{generate, health, ui};
use super::middleware::log_request;
use super::state::SharedState;

/// Build the complete router.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // --- UI ---
        .route("/", get(ui::index))
        // --- Generation ---
        .route("/api/generate", post(generate::generate))
        // --- System ---
        .route("/health", get(health::health))
        .route("/api/keep-alive", get(health::keep_alive))
        // --- Middleware ---
        .layer(axum::middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
