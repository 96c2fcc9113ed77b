//! Hands the current rendering to the external PDF rasterizer.
//!
//! The rasterizer lives on the host; the core only guarantees a complete,
//! current rendering plus a file name and page settings.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::ResumeState;
use crate::preview::{render, RenderedResume};
use crate::state::AppState;

pub const DEFAULT_EXPORT_NAME: &str = "resume";

/// Page settings forwarded to the rasterizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportOptions {
    pub margin_in: f32,
    pub page_format: &'static str,
    pub orientation: &'static str,
    pub image_type: &'static str,
    pub image_quality: f32,
    pub scale: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            margin_in: 0.5,
            page_format: "letter",
            orientation: "portrait",
            image_type: "jpeg",
            image_quality: 0.98,
            scale: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub filename: String,
    pub options: ExportOptions,
    pub resume: RenderedResume,
}

/// `<name>.pdf`, or `resume.pdf` when no name has been entered. Characters
/// that are not allowed in file names become `_`.
pub fn export_filename(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return format!("{DEFAULT_EXPORT_NAME}.pdf");
    }
    let safe: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{safe}.pdf")
}

pub fn prepare_export(state: &ResumeState) -> ExportDocument {
    ExportDocument {
        filename: export_filename(&state.personal.name),
        options: ExportOptions::default(),
        resume: render(state).resume,
    }
}

/// GET /api/v1/export
pub async fn handle_export(State(state): State<AppState>) -> Result<Json<ExportDocument>, AppError> {
    let document = prepare_export(state.store()?.state());
    tracing::info!("Prepared export '{}'", document.filename);
    Ok(Json(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_name() {
        assert_eq!(export_filename("Jane Doe"), "Jane Doe.pdf");
    }

    #[test]
    fn test_filename_fallback() {
        assert_eq!(export_filename(""), "resume.pdf");
        assert_eq!(export_filename("   "), "resume.pdf");
    }

    #[test]
    fn test_filename_sanitized() {
        assert_eq!(export_filename("A/B: C?"), "A_B_ C_.pdf");
    }

    #[test]
    fn test_export_matches_preview() {
        let mut state = ResumeState::seeded();
        state.personal.name = "Jane".to_string();
        state.summary = "Hello".to_string();
        let document = prepare_export(&state);
        assert_eq!(document.filename, "Jane.pdf");
        assert_eq!(document.resume, render(&state).resume);
        assert_eq!(document.options.page_format, "letter");
    }
}
