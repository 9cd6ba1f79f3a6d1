//! LLM client abstraction and implementations.
//!
//! The semantic adjudicator and the semantic entity extractor both talk to a
//! model through [`LlmClient`]. The concrete client is picked from `[llm]` in
//! the config by [`create_llm_client`] at process start and injected into the
//! pipeline; nothing here holds global state.

mod anthropic;
mod config;
mod gemini;
mod json;
mod ollama;
mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub use anthropic::AnthropicClient;
pub use config::{LlmConfig, LlmProvider};
pub use gemini::GeminiClient;
pub use json::{extract_json_object, parse_json_reply, JsonExtractError};
pub use ollama::OllamaClient;
pub use openai::OpenAiClient;

/// Error type for LLM operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Not configured")]
    NotConfigured,
}

impl LlmError {
    /// Map a transport error, keeping timeouts distinguishable.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Option<Duration>) -> Self {
        match (err.is_timeout(), timeout) {
            (true, Some(after)) => LlmError::Timeout(after),
            _ => LlmError::Http(err.to_string()),
        }
    }
}

/// Token usage statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Request for a completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt (instructions for the model)
    pub system: Option<String>,
    /// User message
    pub prompt: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Temperature (0.0 = deterministic, 1.0 = creative)
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            max_tokens: 1024,
            temperature: 0.0,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Response from a completion.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// The generated text
    pub text: String,
    /// Token usage
    pub usage: LlmUsage,
    /// Model used
    pub model: String,
}

/// Trait for LLM clients.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Provider name (e.g., "anthropic", "gemini", "ollama")
    fn provider(&self) -> &str;

    /// Human-facing provider name, used to prefix degraded justifications
    /// (e.g., "Gemini" in "Gemini Error: ...").
    fn label(&self) -> &str;

    /// Model name (e.g., "gemini-1.5-flash-latest")
    fn model(&self) -> &str;

    /// Send a completion request and get a text response.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

/// Build a `reqwest::Client` with the configured request timeout.
pub(crate) fn http_client(timeout: Option<Duration>) -> reqwest::Client {
    let builder = reqwest::Client::builder();
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    builder.build().unwrap_or_default()
}

/// Create the client selected by the `[llm]` config section.
pub fn create_llm_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    let api_key = config.resolve_api_key();
    let timeout = Some(Duration::from_secs(u64::from(config.timeout_secs)));

    let client: Arc<dyn LlmClient> = match config.provider {
        LlmProvider::Anthropic => {
            let mut client = AnthropicClient::new(api_key.unwrap_or_default(), &config.model)
                .with_timeout(timeout);
            if let Some(base) = &config.api_base {
                client = client.with_api_base(base);
            }
            Arc::new(client)
        }
        LlmProvider::OpenAi | LlmProvider::Custom => {
            let mut client =
                OpenAiClient::new(api_key, &config.model).with_timeout(timeout);
            match (&config.provider, &config.api_base) {
                (_, Some(base)) => client = client.with_api_base(base),
                (LlmProvider::Custom, None) => return Err(LlmError::NotConfigured),
                _ => {}
            }
            Arc::new(client)
        }
        LlmProvider::Ollama => {
            let mut client = OllamaClient::new(&config.model).with_timeout(timeout);
            if let Some(base) = &config.api_base {
                client = client.with_api_base(base);
            }
            Arc::new(client)
        }
        LlmProvider::Gemini => {
            let mut client = GeminiClient::new(api_key.unwrap_or_default(), &config.model)
                .with_timeout(timeout);
            if let Some(base) = &config.api_base {
                client = client.with_api_base(base);
            }
            Arc::new(client)
        }
    };

    Ok(client)
}
