//! Assist Client — rewrites the summary through an external text-generation
//! service.
//!
//! The wire protocol lives behind `GenerationTransport`; this module owns the
//! retry policy. Up to `max_attempts` tries, sleeping `base_delay`, then twice
//! that, and so on between them. Nothing sleeps after the last attempt.

pub mod gemini;
pub mod handlers;
pub mod prompts;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::ResumeError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response structure: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Generation service returned empty content")]
    EmptyContent,
}

/// One request/response exchange with a generation service.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AssistError>;
}

#[derive(Clone)]
pub struct AssistClient {
    transport: Arc<dyn GenerationTransport>,
    max_attempts: u32,
    base_delay: Duration,
}

impl AssistClient {
    pub fn new(transport: Arc<dyn GenerationTransport>) -> Self {
        Self {
            transport,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }

    pub fn with_retry_policy(mut self, max_attempts: u32, base_delay: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.base_delay = base_delay;
        self
    }

    /// Returns a rewritten, trimmed version of `text`.
    pub async fn request_rewrite(&self, text: &str) -> Result<String, ResumeError> {
        if text.trim().is_empty() {
            return Err(ResumeError::Validation(
                "Please write a summary first before asking for AI suggestions.".to_string(),
            ));
        }

        let prompt = prompts::rewrite_summary_prompt(text);
        let mut delay = self.base_delay;
        let mut last_error: Option<AssistError> = None;

        for attempt in 1..=self.max_attempts {
            match self.attempt(&prompt).await {
                Ok(rewritten) => {
                    debug!(
                        "Assist call succeeded on attempt {attempt}: {} chars",
                        rewritten.len()
                    );
                    return Ok(rewritten);
                }
                Err(e) => {
                    if attempt < self.max_attempts {
                        warn!(
                            "Assist call failed, attempt {attempt}. Retrying in {}ms: {e}",
                            delay.as_millis()
                        );
                        tokio::time::sleep(delay).await;
                        delay *= 2;
                    } else {
                        warn!("Assist call failed, attempt {attempt}. Giving up: {e}");
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(ResumeError::AssistUnavailable(
            last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no attempt was made".to_string()),
        ))
    }

    async fn attempt(&self, prompt: &str) -> Result<String, AssistError> {
        let text = self.transport.generate(prompt).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(AssistError::EmptyContent);
        }
        Ok(text.to_string())
    }
}

/// Guards against overlapping assist calls. The host holds one flag; whoever
/// acquires it keeps it until the returned guard is dropped.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(self.0.clone()))
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::time::Instant;

    /// Replays scripted outcomes and records when each call arrived.
    pub(crate) struct ScriptedTransport {
        outcomes: Mutex<VecDeque<Result<String, AssistError>>>,
        calls: Mutex<Vec<Instant>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedTransport {
        pub(crate) fn new(outcomes: Vec<Result<String, AssistError>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                calls: Mutex::new(Vec::new()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn call_times(&self) -> Vec<Instant> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerationTransport for ScriptedTransport {
        async fn generate(&self, prompt: &str) -> Result<String, AssistError> {
            self.calls.lock().unwrap().push(Instant::now());
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(AssistError::EmptyContent))
        }
    }

    pub(crate) fn server_error() -> AssistError {
        AssistError::Api {
            status: 503,
            message: "overloaded".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_on_third_attempt_with_doubling_backoff() {
        let transport = ScriptedTransport::new(vec![
            Err(server_error()),
            Err(AssistError::EmptyContent),
            Ok("  Polished summary.  ".to_string()),
        ]);
        let client = AssistClient::new(transport.clone());

        let result = client.request_rewrite("I write code").await.unwrap();
        assert_eq!(result, "Polished summary.");

        let calls = transport.call_times();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1] - calls[0], Duration::from_millis(1000));
        assert_eq!(calls[2] - calls[1], Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_failing_gives_up_after_three() {
        let transport = ScriptedTransport::new(vec![
            Err(server_error()),
            Err(server_error()),
            Err(server_error()),
            Ok("never reached".to_string()),
        ]);
        let client = AssistClient::new(transport.clone());

        let started = Instant::now();
        let err = client.request_rewrite("I write code").await.unwrap_err();
        assert!(matches!(err, ResumeError::AssistUnavailable(_)));
        assert_eq!(transport.call_times().len(), 3);
        // 1s + 2s of backoff, no sleep after the final attempt
        assert_eq!(started.elapsed(), Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_success_makes_one_call() {
        let transport = ScriptedTransport::new(vec![Ok("Done".to_string())]);
        let client = AssistClient::new(transport.clone());
        assert_eq!(client.request_rewrite("text").await.unwrap(), "Done");
        assert_eq!(transport.call_times().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected_without_calling() {
        let transport = ScriptedTransport::new(vec![Ok("unused".to_string())]);
        let client = AssistClient::new(transport.clone());
        let err = client.request_rewrite("   ").await.unwrap_err();
        assert!(matches!(err, ResumeError::Validation(_)));
        assert!(transport.call_times().is_empty());
    }

    #[tokio::test]
    async fn test_prompt_wraps_summary() {
        let transport = ScriptedTransport::new(vec![Ok("Done".to_string())]);
        let client = AssistClient::new(transport.clone());
        client.request_rewrite("Built things").await.unwrap();
        let seen = transport.prompts.lock().unwrap().clone();
        assert_eq!(seen, vec![prompts::rewrite_summary_prompt("Built things")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_policy() {
        let transport = ScriptedTransport::new(vec![Err(server_error()), Err(server_error())]);
        let client = AssistClient::new(transport.clone())
            .with_retry_policy(2, Duration::from_millis(50));
        let started = Instant::now();
        assert!(client.request_rewrite("x").await.is_err());
        assert_eq!(transport.call_times().len(), 2);
        assert_eq!(started.elapsed(), Duration::from_millis(50));
    }

    #[test]
    fn test_busy_flag_blocks_second_acquire() {
        let flag = BusyFlag::default();
        let guard = flag.try_acquire().expect("first acquire");
        assert!(flag.is_busy());
        assert!(flag.try_acquire().is_none());
        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.try_acquire().is_some());
    }
}
