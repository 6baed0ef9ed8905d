use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// One request to the text-generation service: system + user instruction
/// plus sampling parameters. The service enforces no response schema; the
/// raw text comes back for the response parser to validate.
#[derive(Clone, Debug)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion service not configured: {0}")]
    NotConfigured(&'static str),
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("completion service returned HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("completion response was not decodable: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("completion response contained no choices")]
    EmptyChoices,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat completions endpoint. One request,
/// one response: no retry, no backoff, no request timeout — a failure here
/// is terminal for that call and is surfaced to the orchestrator.
pub struct HttpCompletionClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: SecretString,
}

impl HttpCompletionClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.completion_base_url.trim_end_matches('/').to_string(),
            model: config.completion_model.clone(),
            api_key: config.completion_api_key.clone(),
        }
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self.api_key.expose_secret();
        if api_key.is_empty() {
            return Err(CompletionError::NotConfigured(
                "DASHSCOPE_API_KEY / OPENAI_API_KEY",
            ));
        }

        let url = format!("{}/chat/completions", self.base_url);
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                ChatMessage { role: "system", content: request.system },
                ChatMessage { role: "user", content: request.user },
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
            "stream": false,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("completion service returned {}: {}", status, body);
            return Err(CompletionError::HttpStatus { status, body });
        }

        let parsed: ChatResponse = serde_json::from_slice(&response.bytes().await?)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyChoices)
    }
}
