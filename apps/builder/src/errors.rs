use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures of the resume core. None of them is fatal, and every operation
/// that returns one leaves the form state untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResumeError {
    /// Empty required input or a reference to something that is not there.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generation service exhausted its retries or is not configured.
    #[error("Assist unavailable: {0}")]
    AssistUnavailable(String),

    /// The host lacks a capability such as dictation.
    #[error("Feature unsupported: {0}")]
    FeatureUnsupported(String),
}

/// Host-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Resume(#[from] ResumeError),

    #[error("An assist request is already in progress")]
    AssistBusy,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Resume(ResumeError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Resume(ResumeError::AssistUnavailable(msg)) => {
                tracing::warn!("Assist unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "ASSIST_UNAVAILABLE",
                    "Sorry, we couldn't get AI suggestions at this time. Please try again later."
                        .to_string(),
                )
            }
            AppError::Resume(ResumeError::FeatureUnsupported(msg)) => (
                StatusCode::NOT_IMPLEMENTED,
                "FEATURE_UNSUPPORTED",
                msg.clone(),
            ),
            AppError::AssistBusy => (
                StatusCode::CONFLICT,
                "ASSIST_BUSY",
                self.to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
