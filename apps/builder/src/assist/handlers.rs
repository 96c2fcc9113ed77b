//! Axum route handlers for the Assist API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::{AppError, ResumeError};
use crate::models::FieldRef;
use crate::preview::Preview;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AssistStatusResponse {
    pub available: bool,
    pub busy: bool,
}

/// POST /api/v1/assist/summary
///
/// Rewrites the current summary and applies the result as a single summary
/// edit. A second call while one is in flight is rejected with 409.
pub async fn handle_rewrite_summary(
    State(state): State<AppState>,
) -> Result<Json<Preview>, AppError> {
    let client = state.assist.as_ref().ok_or_else(|| {
        ResumeError::AssistUnavailable("no generation service is configured".to_string())
    })?;
    let _busy = state.assist_busy.try_acquire().ok_or(AppError::AssistBusy)?;

    let summary = state.store()?.state().summary.clone();
    info!("Requesting summary rewrite ({} chars)", summary.len());
    let rewritten = client.request_rewrite(&summary).await?;

    let mut store = state.store()?;
    store.set_field(FieldRef::Summary, rewritten)?;
    Ok(Json(store.preview()))
}

/// GET /api/v1/assist/status
///
/// Lets the presentation layer disable its assist button.
pub async fn handle_assist_status(State(state): State<AppState>) -> Json<AssistStatusResponse> {
    Json(AssistStatusResponse {
        available: state.assist.is_some(),
        busy: state.assist_busy.is_busy(),
    })
}
