use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::llm::{LlmConfig, LlmProvider};
use crate::pipeline::PipelineConfig;
use crate::rules::RuleConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub llm: LlmConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub rules: RuleConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Largest accepted multipart body, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub llm: SanitizedLlmConfig,
    pub pipeline: PipelineConfig,
    pub rules: RuleConfig,
}

/// Sanitized LLM config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedLlmConfig {
    pub provider: LlmProvider,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    pub api_key_configured: bool,
    pub timeout_secs: u32,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            llm: SanitizedLlmConfig {
                provider: config.llm.provider.clone(),
                model: config.llm.model.clone(),
                api_base: config.llm.api_base.clone(),
                api_key_configured: config
                    .llm
                    .resolve_api_key()
                    .is_some_and(|key| !key.is_empty()),
                timeout_secs: config.llm.timeout_secs,
                max_tokens: config.llm.max_tokens,
                temperature: config.llm.temperature,
            },
            pipeline: config.pipeline.clone(),
            rules: config.rules.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let toml = r#"
[llm]
provider = "gemini"
model = "gemini-1.5-flash-latest"
api_key = "secret"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.llm.provider, LlmProvider::Gemini);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_upload_bytes, 20 * 1024 * 1024);
        assert!(!config.pipeline.semantic_entities);
        assert_eq!(config.rules.approved_amount, "₹80,000");
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000
max_upload_bytes = 1024

[llm]
provider = "ollama"
model = "llama3"
api_base = "http://localhost:11434"

[pipeline]
semantic_entities = true

[rules]
approved_amount = "₹50,000"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.server.max_upload_bytes, 1024);
        assert!(config.pipeline.semantic_entities);
        assert_eq!(config.rules.approved_amount, "₹50,000");
        assert_eq!(config.rules.rejected_amount, "₹0");
    }

    #[test]
    fn test_missing_llm_section_is_rejected() {
        let toml = r#"
[server]
port = 8080
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_sanitized_config_hides_api_key() {
        let toml = r#"
[llm]
provider = "anthropic"
model = "claude-3-haiku"
api_key = "sk-very-secret"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let sanitized = SanitizedConfig::from(&config);
        assert!(sanitized.llm.api_key_configured);

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("sk-very-secret"));
        assert!(json.contains("\"api_key_configured\":true"));
    }

    #[test]
    fn test_sanitized_config_without_key() {
        let toml = r#"
[llm]
provider = "ollama"
model = "llama3"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!SanitizedConfig::from(&config).llm.api_key_configured);
    }
}
