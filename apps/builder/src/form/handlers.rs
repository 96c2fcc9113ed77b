//! Axum route handlers for the Form API. Every mutation answers with the
//! freshly rendered preview.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::form::dictation::apply_transcript;
use crate::models::{EntryId, EntryParent, FieldRef, ResumeState, SectionId, Template};
use crate::preview::Preview;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SetFieldRequest {
    pub field: FieldRef,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub parent: EntryParent,
}

#[derive(Debug, Deserialize)]
pub struct AddSectionRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    pub skill: String,
}

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub template: Template,
}

#[derive(Debug, Deserialize)]
pub struct DictationRequest {
    pub field: FieldRef,
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse<T> {
    pub id: T,
    pub preview: Preview,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/preview
pub async fn handle_get_preview(State(state): State<AppState>) -> Result<Json<Preview>, AppError> {
    Ok(Json(state.store()?.preview()))
}

/// GET /api/v1/form
///
/// Raw form state, for repopulating inputs.
pub async fn handle_get_form(
    State(state): State<AppState>,
) -> Result<Json<ResumeState>, AppError> {
    Ok(Json(state.store()?.state().clone()))
}

/// PUT /api/v1/form/field
pub async fn handle_set_field(
    State(state): State<AppState>,
    Json(req): Json<SetFieldRequest>,
) -> Result<Json<Preview>, AppError> {
    let mut store = state.store()?;
    store.set_field(req.field, req.value)?;
    Ok(Json(store.preview()))
}

/// POST /api/v1/form/entries
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Json(req): Json<AddEntryRequest>,
) -> Result<Json<CreatedResponse<EntryId>>, AppError> {
    let mut store = state.store()?;
    let id = store.add_entry(req.parent)?;
    Ok(Json(CreatedResponse {
        id,
        preview: store.preview(),
    }))
}

/// DELETE /api/v1/form/entries/:id
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<Json<Preview>, AppError> {
    let mut store = state.store()?;
    store.remove_entry(id);
    Ok(Json(store.preview()))
}

/// POST /api/v1/form/sections
pub async fn handle_add_section(
    State(state): State<AppState>,
    Json(req): Json<AddSectionRequest>,
) -> Result<Json<CreatedResponse<SectionId>>, AppError> {
    let mut store = state.store()?;
    let id = store.add_custom_section(&req.title)?;
    Ok(Json(CreatedResponse {
        id,
        preview: store.preview(),
    }))
}

/// DELETE /api/v1/form/sections/:id
pub async fn handle_remove_section(
    State(state): State<AppState>,
    Path(id): Path<SectionId>,
) -> Result<Json<Preview>, AppError> {
    let mut store = state.store()?;
    store.remove_custom_section(id);
    Ok(Json(store.preview()))
}

/// POST /api/v1/form/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(req): Json<SkillRequest>,
) -> Result<Json<Preview>, AppError> {
    let mut store = state.store()?;
    store.add_skill(&req.skill);
    Ok(Json(store.preview()))
}

/// POST /api/v1/form/skills/commit
///
/// Enter or comma pressed in the skill input.
pub async fn handle_commit_skill_input(
    State(state): State<AppState>,
) -> Result<Json<Preview>, AppError> {
    let mut store = state.store()?;
    store.commit_skill_input();
    Ok(Json(store.preview()))
}

/// DELETE /api/v1/form/skills/:skill
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Result<Json<Preview>, AppError> {
    let mut store = state.store()?;
    store.remove_skill(&skill);
    Ok(Json(store.preview()))
}

/// PUT /api/v1/form/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateRequest>,
) -> Result<Json<Preview>, AppError> {
    let mut store = state.store()?;
    store.set_template(req.template);
    Ok(Json(store.preview()))
}

/// POST /api/v1/form/reset
pub async fn handle_reset(State(state): State<AppState>) -> Result<Json<Preview>, AppError> {
    let mut store = state.store()?;
    store.reset();
    Ok(Json(store.preview()))
}

/// POST /api/v1/form/dictation
pub async fn handle_dictation(
    State(state): State<AppState>,
    Json(req): Json<DictationRequest>,
) -> Result<Json<Preview>, AppError> {
    let mut store = state.store()?;
    apply_transcript(&mut store, state.dictation, req.field, &req.transcript)?;
    Ok(Json(store.preview()))
}
