use axum::extract::State;
use axum::Json;
use log::error;
use serde::Deserialize;

use crate::ai::spec::{generate_spec, GeneratedSpec};
use crate::error::AppError;
use crate::server::error::ApiError;
use crate::server::state::SharedState;

#[derive(Deserialize)]
pub(in crate::server) struct GenerateRequest {
    #[serde(default)]
    prompt: String,
}

/// Submit a product description, get back the generated specification.
///
/// Validation failures keep their message; everything the upstream call can
/// get wrong collapses into one generic retry message, with the real cause
/// in the log.
pub async fn generate(
    State(state): State<SharedState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GeneratedSpec>, ApiError> {
    let spec = generate_spec(&state.chat, &state.config.openai.model, &body.prompt)
        .await
        .map_err(|err| match err {
            AppError::Validation { message } => ApiError::BadRequest(message),
            err => {
                error!("spec generation failed: {err}");
                ApiError::Internal(
                    "Failed to generate specification. Please try again.".to_owned(),
                )
            }
        })?;

    Ok(Json(spec))
}
