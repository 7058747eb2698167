//! HTTP server for the web tool.
//!
//! Serves the embedded single-page UI at `/` and the JSON API under `/api`.
//! Plain HTTP on 0.0.0.0:<port>; a reverse proxy terminates TLS in
//! deployment.

mod error;
mod handlers;
mod middleware;
mod router;
mod state;

pub use router::build_router;
pub use state::{AppState, SharedState};

use log::info;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use crate::config::Config;

/// Bind and serve until the process is stopped.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let port = config.port;
    let state: SharedState = Arc::new(AppState::new(config));

    let app = build_router(state);
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
