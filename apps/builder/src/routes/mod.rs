pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::assist::handlers as assist;
use crate::export;
use crate::form::handlers as form;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Preview (rendering surface)
        .route("/api/v1/preview", get(form::handle_get_preview))
        // Form model
        .route("/api/v1/form", get(form::handle_get_form))
        .route("/api/v1/form/field", put(form::handle_set_field))
        .route("/api/v1/form/entries", post(form::handle_add_entry))
        .route("/api/v1/form/entries/:id", delete(form::handle_remove_entry))
        .route("/api/v1/form/sections", post(form::handle_add_section))
        .route(
            "/api/v1/form/sections/:id",
            delete(form::handle_remove_section),
        )
        .route("/api/v1/form/skills", post(form::handle_add_skill))
        .route(
            "/api/v1/form/skills/commit",
            post(form::handle_commit_skill_input),
        )
        .route("/api/v1/form/skills/:skill", delete(form::handle_remove_skill))
        .route("/api/v1/form/template", put(form::handle_set_template))
        .route("/api/v1/form/reset", post(form::handle_reset))
        .route("/api/v1/form/dictation", post(form::handle_dictation))
        // Assist
        .route("/api/v1/assist/summary", post(assist::handle_rewrite_summary))
        .route("/api/v1/assist/status", get(assist::handle_assist_status))
        // Export
        .route("/api/v1/export", get(export::handle_export))
        .with_state(state)
}
