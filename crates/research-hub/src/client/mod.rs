//! Chat-completion client for paper summaries.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - Structured output through a JSON schema response format
//! - Local diagram resolution for the figures the model names
//!
//! Each summary is exactly one request. Nothing is retried or cached.

mod diagrams;
mod prompt;

pub use diagrams::{DEFAULT_KIND, resolve_diagrams};
pub use prompt::{SCHEMA_NAME, SYSTEM_PROMPT, request_body, response_schema, user_prompt};

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult, SummaryError};
use crate::models::{Diagram, Paper, SummaryPayload, SummaryResult};

/// Summary client for an OpenAI-compatible chat-completion endpoint.
#[derive(Clone)]
pub struct SummaryClient {
    /// HTTP client.
    client: Client,

    /// Full chat-completions URL.
    completions_url: String,

    /// API key (optional; requests fail fast without it).
    api_key: Option<String>,

    /// Model identifier.
    model: String,

    /// Sampling temperature.
    temperature: f64,

    /// Output token cap.
    max_tokens: u32,

    /// Request timeout, reported on timeouts.
    request_timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl SummaryClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        if let Some(ref key) = config.api_key {
            let mut value: reqwest::header::HeaderValue = format!("Bearer {key}").parse()?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            completions_url: config.completions_url(),
            api_key: config.api_key,
            model: config.model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            request_timeout: config.request_timeout,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Model identifier sent with each request.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a structured summary of `paper`.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::NetworkFailure`] when the request cannot be
    /// completed or the endpoint answers with a non-2xx status, and
    /// [`SummaryError::MalformedResponse`] when the completion content is
    /// missing or does not match the summary schema.
    pub async fn generate_summary(
        &self,
        paper: &Paper,
        diagrams: &[Diagram],
    ) -> Result<SummaryResult, SummaryError> {
        let content = self.request_completion(paper).await?;
        let payload: SummaryPayload = serde_json::from_str(&content)?;

        tracing::debug!(
            paper_id = %paper.id,
            key_points = payload.key_points.len(),
            diagrams = payload.important_diagram_descriptions.len(),
            "Summary generated"
        );

        Ok(SummaryResult {
            summary: payload.summary,
            key_points: payload.key_points,
            diagrams: resolve_diagrams(payload.important_diagram_descriptions, diagrams),
        })
    }

    /// Generate a summary, substituting the fallback result on any failure.
    pub async fn summarize_or_fallback(&self, paper: &Paper, diagrams: &[Diagram]) -> SummaryResult {
        match self.generate_summary(paper, diagrams).await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(
                    paper_id = %paper.id,
                    kind = err.kind(),
                    error = %err,
                    "Error generating paper summary"
                );
                SummaryResult::fallback()
            }
        }
    }

    /// Send the completion request and extract `choices[0].message.content`.
    async fn request_completion(&self, paper: &Paper) -> Result<String, SummaryError> {
        if self.api_key.is_none() {
            return Err(ClientError::MissingApiKey.into());
        }

        let body = request_body(&self.model, self.temperature, self.max_tokens, paper);
        tracing::debug!(url = %self.completions_url, model = %self.model, "Requesting summary");

        let response = self
            .client
            .post(&self.completions_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let response = self.handle_response(response).await?;
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        let completion: CompletionResponse = serde_json::from_str(&text)?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or_else(|| SummaryError::malformed("completion has no message content"))
    }

    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.request_timeout)
        } else {
            ClientError::Http(err)
        }
    }

    /// Handle API response status codes.
    async fn handle_response(&self, response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            401 | 403 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::Unauthorized { status: status.as_u16(), message: text })
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for SummaryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryClient")
            .field("completions_url", &self.completions_url)
            .field("model", &self.model)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
