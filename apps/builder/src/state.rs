use std::sync::{Arc, Mutex, MutexGuard};

use crate::assist::{AssistClient, BusyFlag};
use crate::errors::AppError;
use crate::form::dictation::DictationCapability;
use crate::form::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single editing session. Locked only for synchronous work, never
    /// across an `.await`.
    pub store: Arc<Mutex<ResumeStore>>,
    /// `None` when no generation service is configured.
    pub assist: Option<AssistClient>,
    pub assist_busy: BusyFlag,
    pub dictation: DictationCapability,
}

impl AppState {
    pub fn new(assist: Option<AssistClient>, dictation: DictationCapability) -> Self {
        Self {
            store: Arc::new(Mutex::new(ResumeStore::new())),
            assist,
            assist_busy: BusyFlag::default(),
            dictation,
        }
    }

    pub fn store(&self) -> Result<MutexGuard<'_, ResumeStore>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("resume store lock poisoned")))
    }
}
