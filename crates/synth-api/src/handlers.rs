//! HTTP handler for record generation.

use axum::{Extension, Json, extract::rejection::JsonRejection};
use synth_data::prelude::{GenerationRequest, GenerationResponse};
use tracing::info;

use crate::{AppState, errors::AppError};

/// `POST /`: generates `rows` records for the posted field list.
pub async fn generate_records(
    Extension(state): Extension<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>, AppError> {
    let Json(request) = payload?;

    if request.rows > state.max_rows {
        return Err(AppError::InvalidInput(format!(
            "rows must be at most {}, got {}",
            state.max_rows, request.rows
        )));
    }

    let rows = request.rows;
    let fields = request.fields.len();
    let builder = state.builder.clone();
    let response = tokio::task::spawn_blocking(move || builder.generate(&request)).await?;

    info!(rows, fields, "Generated records");

    Ok(Json(response))
}
