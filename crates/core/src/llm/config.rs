//! LLM client configuration.

use serde::{Deserialize, Serialize};

/// LLM provider type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmProvider {
    /// Anthropic Claude API.
    Anthropic,
    /// OpenAI API (GPT models).
    OpenAi,
    /// Local Ollama instance.
    Ollama,
    /// Google Gemini API.
    Gemini,
    /// Custom HTTP endpoint (must be OpenAI-compatible).
    Custom,
}

/// LLM client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// LLM provider.
    pub provider: LlmProvider,
    /// Model name/identifier.
    pub model: String,
    /// API key (can reference env var with ${VAR_NAME}).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Custom API base URL (for proxies or self-hosted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Maximum tokens for completions.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_timeout() -> u32 {
    60
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.3
}

impl LlmConfig {
    /// Resolve the API key, expanding a `${VAR_NAME}` reference from the
    /// environment. An unset variable resolves to `None`.
    pub fn resolve_api_key(&self) -> Option<String> {
        let raw = self.api_key.as_deref()?.trim();
        match raw.strip_prefix("${").and_then(|r| r.strip_suffix('}')) {
            Some(var) => std::env::var(var).ok().filter(|v| !v.is_empty()),
            None if raw.is_empty() => None,
            None => Some(raw.to_string()),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.model.is_empty() {
            return Err("LLM model name cannot be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }
        if self.max_tokens == 0 {
            return Err("llm.max_tokens cannot be 0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("llm.timeout_secs cannot be 0".to_string());
        }
        // API key is optional for local Ollama
        if self.provider != LlmProvider::Ollama
            && self.api_key.is_none()
            && self.api_base.is_none()
        {
            return Err(format!(
                "LLM provider {:?} requires api_key or api_base",
                self.provider
            ));
        }
        if self.provider == LlmProvider::Custom && self.api_base.is_none() {
            return Err("LLM provider Custom requires api_base".to_string());
        }
        Ok(())
    }
}
