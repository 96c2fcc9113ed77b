//! Gemini `generateContent` transport.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assist::{AssistError, GenerationTransport};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

#[derive(Clone)]
pub struct GeminiTransport {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeminiTransport {
    pub fn new(base_url: &str, model: &str, api_key: String) -> Result<Self, AssistError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            endpoint: format!(
                "{}/v1beta/models/{model}:generateContent",
                base_url.trim_end_matches('/')
            ),
            api_key,
        })
    }
}

#[async_trait]
impl GenerationTransport for GeminiTransport {
    async fn generate(&self, prompt: &str) -> Result<String, AssistError> {
        let request_body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        // The key travels in a header so it never shows up in request URLs.
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AssistError::Http(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AssistError::Http(e.without_url()))?;

        if !status.is_success() {
            return Err(AssistError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        let text = parsed.text().ok_or(AssistError::EmptyContent)?;
        debug!("Gemini returned {} chars", text.len());
        Ok(text.to_string())
    }
}
