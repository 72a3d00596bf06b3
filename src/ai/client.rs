//! Remote summarization client
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::prompt_builder::{SUMMARY_TEMPERATURE, build_prompt};
use crate::core::config::AppConfig;
use crate::errors::DigestError;

/// Timeout applied to every summary request.
pub const REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

/// A text-generation backend that turns one message into a summary.
///
/// Implementations report every failure as [`DigestError::RemoteSummary`];
/// callers decide how to recover.
#[async_trait]
pub trait RemoteSummarizer: Send + Sync {
    async fn summarize_remote(&self, text: &str) -> Result<String, DigestError>;
}

/// LLM API client for generating per-message summaries
pub struct LlmClient {
    http: Client,
    completions_url: String,
    api_key: String,
    model_name: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns a configuration error when `endpoint` is not a valid base URL or
    /// the HTTP client cannot be built.
    pub fn new(endpoint: &str, api_key: String, model_name: String) -> Result<Self, DigestError> {
        let completions_url = completions_url(endpoint)?;
        let http = Client::builder()
            .timeout(REMOTE_TIMEOUT)
            .build()
            .map_err(|e| {
                DigestError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            completions_url,
            api_key,
            model_name,
        })
    }

    /// Build a client when the configuration carries an API key.
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, DigestError> {
        config
            .remote_api_key
            .as_ref()
            .map(|key| {
                Self::new(
                    &config.remote_endpoint,
                    key.clone(),
                    config.remote_model.clone(),
                )
            })
            .transpose()
    }
}

#[async_trait]
impl RemoteSummarizer for LlmClient {
    async fn summarize_remote(&self, text: &str) -> Result<String, DigestError> {
        let request_body = build_request_body(&self.model_name, &build_prompt(text));

        #[cfg(feature = "debug-logs")]
        debug!("Summary request body:\n{}", request_body);

        let response = self
            .http
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DigestError::RemoteSummary(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(DigestError::RemoteSummary(format!(
                "status {}: {}",
                status, error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            DigestError::RemoteSummary(format!("failed to parse response: {}", e))
        })?;

        debug!("Received completion from {}", self.completions_url);
        extract_completion_text(&response_json)
    }
}

/// `<base>/chat/completions`, tolerating a trailing slash on the base.
pub fn completions_url(endpoint: &str) -> Result<String, DigestError> {
    let base = endpoint.trim().trim_end_matches('/');
    Url::parse(base).map_err(|e| {
        DigestError::Configuration(format!("invalid OPENAI_BASE_URL {:?}: {}", endpoint, e))
    })?;
    Ok(format!("{}/chat/completions", base))
}

#[must_use]
pub fn build_request_body(model: &str, prompt: &[ChatCompletionMessage]) -> Value {
    let messages: Vec<Value> = prompt
        .iter()
        .map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };

            let content_val = match &msg.content {
                Content::Text(text) => json!(text),
                Content::ImageUrl(_) => json!([]),
            };

            json!({
                "role": role_str,
                "content": content_val
            })
        })
        .collect();

    json!({
        "model": model,
        "messages": messages,
        "temperature": SUMMARY_TEMPERATURE
    })
}

/// Trimmed `choices[0].message.content` of a completion response.
pub fn extract_completion_text(response: &Value) -> Result<String, DigestError> {
    response
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(|s| s.trim().to_string())
        .ok_or_else(|| {
            DigestError::RemoteSummary("response has no choices[0].message.content".to_string())
        })
}
