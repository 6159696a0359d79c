//! HTTP client for an OpenAI-compatible chat-completion endpoint.
//!
//! One request per call: no retries, no caching. The request timeout is
//! always explicit.

use std::time::Duration;

use prospecta_core::AppConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::OutreachError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

/// Provider connection settings.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Bearer credential. `None` or blank leaves the client unconfigured.
    pub api_key: Option<String>,
    /// Full URL of the chat-completions endpoint.
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl ProviderConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.ai_api_key.clone(),
            base_url: config.ai_base_url.clone(),
            model: config.ai_model.clone(),
            timeout_secs: config.ai_timeout_secs,
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Raw completion text plus token accounting, when the provider reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub tokens_used: Option<u32>,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    total_tokens: Option<u32>,
}

/// Client for the chat-completion provider.
pub struct CompletionClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl CompletionClient {
    /// Builds the underlying HTTP client. A missing API key is not an error
    /// here; it surfaces as [`OutreachError::Configuration`] on first use.
    ///
    /// # Errors
    ///
    /// Returns [`OutreachError::Http`] if the `reqwest::Client` cannot be
    /// constructed.
    pub fn new(config: &ProviderConfig) -> Result<Self, OutreachError> {
        let timeout_secs = if config.timeout_secs == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            config.timeout_secs
        };
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent("prospecta/0.1 (outreach)")
            .build()?;

        Ok(Self {
            client,
            api_key: config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_owned),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `messages` and returns the first choice's text.
    ///
    /// # Errors
    ///
    /// - [`OutreachError::Configuration`] if no API key is configured; no
    ///   request is sent.
    /// - [`OutreachError::Http`] on network failure or timeout.
    /// - [`OutreachError::Provider`] on a non-2xx status, carrying the body.
    /// - [`OutreachError::InvalidResponse`] if the 2xx body lacks
    ///   `choices[0].message.content`.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<Completion, OutreachError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            OutreachError::Configuration("OPENAI_API_KEY is not set".to_string())
        })?;

        let request = CompletionRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "AI provider returned an error status");
            return Err(OutreachError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = serde_json::from_str(&body).map_err(|e| {
            OutreachError::InvalidResponse(format!("malformed completion body: {e}"))
        })?;
        let tokens_used = parsed.usage.and_then(|usage| usage.total_tokens);
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| {
                OutreachError::InvalidResponse(
                    "response has no choices[0].message.content".to_string(),
                )
            })?;

        Ok(Completion { text, tokens_used })
    }
}
