//! Axum route handlers for the Polish API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::polish::service::{polish_text, PolishRequest, PolishResponse};
use crate::state::AppState;

/// POST /api/polish
///
/// Body `{ text, mode?, tone? }`. Returns `{ result }`, falling back to the
/// deterministic polish when the external service cannot help.
pub async fn handle_polish(
    State(state): State<AppState>,
    payload: Result<Json<PolishRequest>, JsonRejection>,
) -> Result<Json<PolishResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected polish body: {rejection}");
        AppError::Validation("Invalid request body".to_string())
    })?;

    let response = polish_text(&state, request).await?;
    Ok(Json(response))
}
