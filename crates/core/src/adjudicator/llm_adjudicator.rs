//! LLM-backed adjudicator.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::prompt::{build_adjudication_prompt, ADJUDICATOR_SYSTEM_PROMPT};
use super::types::AdjudicationResult;
use super::Adjudicator;
use crate::llm::{extract_json_object, CompletionRequest, LlmClient};
use crate::metrics::{ADJUDICATIONS_TOTAL, EXTERNAL_SERVICE_DURATION, LLM_TOKENS};

/// Adjudicates claims by prompting a language model.
///
/// Generic over the LLM client type to support different backends
/// (Gemini, Anthropic, Ollama, etc.).
pub struct LlmAdjudicator<C: LlmClient + ?Sized> {
    client: Arc<C>,
    max_tokens: u32,
    temperature: f32,
}

impl<C: LlmClient + ?Sized> LlmAdjudicator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            max_tokens: 1024,
            temperature: 0.3,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn degrade(&self, message: impl std::fmt::Display) -> AdjudicationResult {
        warn!(
            provider = self.client.provider(),
            error = %message,
            "Adjudication degraded to rejection"
        );
        ADJUDICATIONS_TOTAL
            .with_label_values(&[self.client.provider(), "degraded"])
            .inc();
        AdjudicationResult::degraded(self.client.label(), message)
    }
}

#[async_trait]
impl<C: LlmClient + ?Sized + 'static> Adjudicator for LlmAdjudicator<C> {
    fn name(&self) -> &str {
        self.client.provider()
    }

    async fn adjudicate(&self, policy_text: &str, query_text: &str) -> AdjudicationResult {
        let request = CompletionRequest::new(build_adjudication_prompt(policy_text, query_text))
            .with_system(ADJUDICATOR_SYSTEM_PROMPT)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);

        debug!(
            provider = self.client.provider(),
            model = self.client.model(),
            policy_chars = policy_text.len(),
            "Requesting adjudication"
        );

        let timer = EXTERNAL_SERVICE_DURATION
            .with_label_values(&[self.client.provider(), "adjudicate"])
            .start_timer();
        let result = self.client.complete(request).await;
        timer.observe_duration();

        let response = match result {
            Ok(response) => response,
            Err(e) => return self.degrade(e),
        };

        LLM_TOKENS
            .with_label_values(&[self.client.provider(), "input"])
            .inc_by(u64::from(response.usage.input_tokens));
        LLM_TOKENS
            .with_label_values(&[self.client.provider(), "output"])
            .inc_by(u64::from(response.usage.output_tokens));

        match extract_json_object(&response.text) {
            Ok(object) => {
                ADJUDICATIONS_TOTAL
                    .with_label_values(&[self.client.provider(), "success"])
                    .inc();
                AdjudicationResult::from_object(object)
            }
            Err(e) => self.degrade(e),
        }
    }
}
