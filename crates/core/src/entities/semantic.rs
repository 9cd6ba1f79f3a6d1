//! LLM-backed entity extraction.

use std::sync::Arc;

use tracing::{debug, warn};

use super::types::{SemanticEntities, SemanticParse};
use crate::llm::{parse_json_reply, CompletionRequest, LlmClient};
use crate::metrics::{EXTERNAL_SERVICE_DURATION, LLM_TOKENS};

const SYSTEM_PROMPT: &str = "You are an intelligent insurance assistant. \
Given a natural language claim query, extract the requested fields as JSON. \
Do not include any explanation or extra text, just valid JSON.";

/// Asks a model to pull structured fields out of a claim query.
///
/// Generic over the client so tests can inject a mock.
pub struct LlmEntityExtractor<C: LlmClient + ?Sized> {
    client: Arc<C>,
    max_tokens: u32,
    temperature: f32,
}

impl<C: LlmClient + ?Sized> LlmEntityExtractor<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            max_tokens: 256,
            temperature: 0.0,
        }
    }

    fn build_prompt(query: &str) -> String {
        format!(
            r#"Extract the following fields:

- age (integer)
- gender (male/female/unknown)
- procedure (string)
- location (string)
- policy_duration_months (integer)

Use null for anything the query does not state.

Query:
"{query}""#
        )
    }

    /// Extract entities. Failures are reported in the returned value, never
    /// raised.
    pub async fn extract(&self, query: &str) -> SemanticParse {
        let request = CompletionRequest::new(Self::build_prompt(query))
            .with_system(SYSTEM_PROMPT)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);

        let timer = EXTERNAL_SERVICE_DURATION
            .with_label_values(&[self.client.provider(), "extract_entities"])
            .start_timer();
        let result = self.client.complete(request).await;
        timer.observe_duration();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!(provider = self.client.provider(), error = %e, "Semantic entity extraction failed");
                return SemanticParse::failed(e.to_string());
            }
        };

        LLM_TOKENS
            .with_label_values(&[self.client.provider(), "input"])
            .inc_by(u64::from(response.usage.input_tokens));
        LLM_TOKENS
            .with_label_values(&[self.client.provider(), "output"])
            .inc_by(u64::from(response.usage.output_tokens));

        match parse_json_reply::<SemanticEntities>(&response.text) {
            Ok(entities) => {
                debug!(?entities, "Semantic entities extracted");
                SemanticParse::Parsed(entities)
            }
            Err(e) => {
                warn!(error = %e, "Semantic entity reply was not usable JSON");
                SemanticParse::failed(response.text)
            }
        }
    }
}
