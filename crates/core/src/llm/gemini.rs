//! Google Gemini `generateContent` client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{http_client, CompletionRequest, CompletionResponse, LlmClient, LlmError, LlmUsage};

/// Gemini API client.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    /// Create a client. Accepts model names with or without the `models/`
    /// prefix (e.g., "models/gemini-1.5-flash-latest").
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        let model = model
            .strip_prefix("models/")
            .map(str::to_string)
            .unwrap_or(model);
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model,
            api_base: "https://generativelanguage.googleapis.com".to_string(),
            timeout: None,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.client = http_client(timeout);
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

#[async_trait]
impl LlmClient for GeminiClient {
    fn provider(&self) -> &str {
        "gemini"
    }

    fn label(&self) -> &str {
        "Gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let generate_request = GenerateRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: request.prompt,
                }],
            }],
            system_instruction: request.system.map(|text| GeminiContent {
                role: None,
                parts: vec![GeminiPart { text }],
            }),
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.api_base, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&generate_request)
            .send()
            .await
            .map_err(|e| LlmError::from_reqwest(e, self.timeout))?;

        let status = response.status().as_u16();

        if status != 200 {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            return Err(LlmError::Api { status, message });
        }

        let generate_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Json(e.to_string()))?;

        Ok(response_into_completion(generate_response, &self.model))
    }
}

fn response_into_completion(response: GenerateResponse, model: &str) -> CompletionResponse {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let usage = response
        .usage_metadata
        .map(|u| LlmUsage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        })
        .unwrap_or_default();

    CompletionResponse {
        text,
        usage,
        model: response.model_version.unwrap_or_else(|| model.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_prefix_is_stripped() {
        let client = GeminiClient::new("key", "models/gemini-1.5-flash-latest");
        assert_eq!(client.model(), "gemini-1.5-flash-latest");
        assert_eq!(client.label(), "Gemini");
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: "query".to_string(),
                }],
            }],
            system_instruction: None,
            generation_config: GenerationConfig {
                temperature: 0.3,
                max_output_tokens: 512,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "query");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 512);
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn test_response_into_completion() {
        let body = r#"{
            "candidates": [{"content": {"role": "model", "parts": [{"text": "```json\n{}"}, {"text": "\n```"}]}}],
            "usageMetadata": {"promptTokenCount": 40, "candidatesTokenCount": 7},
            "modelVersion": "gemini-1.5-flash-002"
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        let completion = response_into_completion(parsed, "gemini-1.5-flash-latest");
        assert_eq!(completion.text, "```json\n{}\n```");
        assert_eq!(completion.usage.input_tokens, 40);
        assert_eq!(completion.usage.output_tokens, 7);
        assert_eq!(completion.model, "gemini-1.5-flash-002");
    }

    #[test]
    fn test_blocked_response_yields_empty_text() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        let completion = response_into_completion(parsed, "gemini-pro");
        assert!(completion.text.is_empty());
        assert_eq!(completion.model, "gemini-pro");
    }
}
