//! Middleware for the HTTP server.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::debug;

/// Log every request method and path.
pub async fn log_request(request: Request, next: Next) -> Response {
    debug!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}
