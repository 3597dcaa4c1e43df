//! Summarizer gateway: turns a day's log into a manager-ready update.
//!
//! The gateway is an explicit object built from [`GatewayConfig`]; the API
//! key is injected at construction and never read from global state.

use crate::errors::GatewayError;
use crate::utils::text::truncate;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const INSTRUCTION: &str = "Summarize the following daily work log into concise, professional \
bullet points suitable for sending as a daily update to a manager. Group them under \
Progress, Blockers and Learnings, keep Blockers and Learnings to at most three bullets each, \
and do not invent work that is not in the log.";

/// Longest service error message kept in a [`GatewayError::Service`].
const MAX_ERROR_CHARS: usize = 200;

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, log_text: &str) -> Result<String, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Variable name reported when the key is missing.
    pub api_key_env: String,
    pub timeout_secs: u64,
}

/// Prompt sent for `log_text`.
pub fn build_prompt(log_text: &str) -> String {
    format!("{INSTRUCTION}\n\n{log_text}\n")
}

/// Google Gemini `generateContent` client.
pub struct GeminiGateway {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl GeminiGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn request_body(log_text: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [
                { "role": "user", "parts": [ { "text": build_prompt(log_text) } ] }
            ]
        })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Join the text parts of the first candidate and trim the result.
fn extract_text(body: &str) -> Result<String, GatewayError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| GatewayError::Malformed(e.to_string()))?;

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(GatewayError::EmptyResponse);
    }
    Ok(text.to_string())
}

fn service_message(body: &str) -> String {
    let msg = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());
    truncate(&msg, MAX_ERROR_CHARS)
}

#[async_trait]
impl Summarizer for GeminiGateway {
    async fn summarize(&self, log_text: &str) -> Result<String, GatewayError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(GatewayError::MissingCredential(
                self.config.api_key_env.clone(),
            ));
        };

        debug!(model = %self.config.model, chars = log_text.len(), "requesting summary");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(log_text))
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "summary request rejected");
            return Err(GatewayError::Service {
                status: status.as_u16(),
                message: service_message(&body),
            });
        }

        extract_text(&body)
    }
}
