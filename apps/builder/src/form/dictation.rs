//! Speech-to-text intake. Recognition itself happens on the host; the core
//! only accepts the recognized transcript as an ordinary field edit.

use tracing::info;

use crate::errors::ResumeError;
use crate::form::ResumeStore;
use crate::models::FieldRef;

/// Whether the host can do speech recognition at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictationCapability {
    pub available: bool,
}

/// Replaces `field` with the recognized `transcript`.
///
/// Fails with `FeatureUnsupported` before touching state when the host has no
/// recognizer, and with `Validation` when nothing was recognized.
pub fn apply_transcript(
    store: &mut ResumeStore,
    capability: DictationCapability,
    field: FieldRef,
    transcript: &str,
) -> Result<(), ResumeError> {
    if !capability.available {
        return Err(ResumeError::FeatureUnsupported(
            "Sorry, your browser doesn't support speech recognition.".to_string(),
        ));
    }
    let transcript = transcript.trim();
    if transcript.is_empty() {
        return Err(ResumeError::Validation(
            "No speech was recognized. Try again.".to_string(),
        ));
    }
    info!("Dictation filled {field:?} ({} chars)", transcript.len());
    store.set_field(field, transcript)
}
