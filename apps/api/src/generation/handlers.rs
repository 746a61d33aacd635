//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::export::content_disposition;
use crate::generation::generator::generate_copy;
use crate::generation::length::DescriptionLength;
use crate::generation::tone::ToneOfVoice;
use crate::models::generation::GenerationRecord;
use crate::models::product::{ProductDetails, MAX_NUM_DESCRIPTIONS};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub model: String,
    pub tones: Vec<SelectOption>,
    pub lengths: Vec<SelectOption>,
    pub max_num_descriptions: u8,
    pub defaults: ProductDetails,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/options
///
/// Selector choices and pre-filled defaults for the form.
pub async fn handle_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        model: state.llm.model().to_string(),
        tones: ToneOfVoice::ALL
            .iter()
            .map(|t| SelectOption {
                value: t.value(),
                label: t.label(),
            })
            .collect(),
        lengths: DescriptionLength::ALL
            .iter()
            .map(|l| SelectOption {
                value: l.value(),
                label: l.label(),
            })
            .collect(),
        max_num_descriptions: MAX_NUM_DESCRIPTIONS,
        defaults: ProductDetails::sample(),
    })
}

/// POST /api/v1/generations
///
/// Validates the form, makes one LLM call, and stores the result for regenerate/download.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(details): Json<ProductDetails>,
) -> Result<(StatusCode, Json<GenerationRecord>), AppError> {
    let copy = generate_copy(state.llm.as_ref(), &details).await?;
    let record = GenerationRecord::new(details, copy);

    info!("Created generation {}", record.id);
    state.store.insert(record.clone()).await;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/generations/:id
pub async fn handle_get_generation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GenerationRecord>, AppError> {
    let record = find_record(&state, id).await?;
    Ok(Json(record))
}

/// POST /api/v1/generations/:id/regenerate
///
/// Re-runs the same single call with the stored inputs and replaces the output.
pub async fn handle_regenerate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GenerationRecord>, AppError> {
    let details = find_record(&state, id).await?.details;

    let copy = generate_copy(state.llm.as_ref(), &details).await?;

    // Applied under the store lock so overlapping regenerations all count.
    let record = state
        .store
        .update(id, |record| record.apply_regeneration(copy))
        .await
        .ok_or_else(|| AppError::NotFound(format!("Generation {id} was evicted")))?;

    info!(
        "Regenerated generation {} ({} regeneration(s))",
        record.id, record.regenerations
    );

    Ok(Json(record))
}

/// GET /api/v1/generations/:id/download
///
/// The raw output as a UTF-8 text attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let record = find_record(&state, id).await?;
    let disposition = content_disposition(&record.details.product_name);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        record.content,
    )
        .into_response())
}

async fn find_record(state: &AppState, id: Uuid) -> Result<GenerationRecord, AppError> {
    state
        .store
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Generation {id} not found")))
}
