use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;

use crate::keepalive::{probe_session, KeepAliveReport};
use crate::server::state::SharedState;

#[derive(Serialize)]
pub(in crate::server) struct HealthResponse {
    ok: bool,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Exercise the backing data service's session lookup so the hosted
/// project registers activity.
pub async fn keep_alive(State(state): State<SharedState>) -> Response {
    match probe_session(&state.http, &state.config.keepalive).await {
        Ok(()) => (StatusCode::OK, Json(KeepAliveReport::alive())).into_response(),
        Err(err) => {
            error!("keep-alive probe failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(KeepAliveReport::error(err.to_string())),
            )
                .into_response()
        }
    }
}
