//! Mock LLM client for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, LlmUsage};

/// Mock implementation of the LlmClient trait.
///
/// Replies are served from a FIFO queue; each queued entry answers exactly one
/// call. Once the queue is drained, calls get the default reply if one is set
/// and `LlmError::NotConfigured` otherwise.
#[derive(Debug, Default)]
pub struct MockLlmClient {
    replies: Arc<RwLock<VecDeque<Result<String, LlmError>>>>,
    default_reply: Arc<RwLock<Option<String>>>,
    requests: Arc<RwLock<Vec<CompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers every call with the same reply.
    pub fn with_default_reply(reply: impl Into<String>) -> Self {
        Self {
            default_reply: Arc::new(RwLock::new(Some(reply.into()))),
            ..Self::default()
        }
    }

    /// Queue a successful reply.
    pub async fn push_reply(&self, text: impl Into<String>) {
        self.replies.write().await.push_back(Ok(text.into()));
    }

    /// Queue a failure.
    pub async fn push_error(&self, error: LlmError) {
        self.replies.write().await.push_back(Err(error));
    }

    /// Set the reply used once the queue is empty.
    pub async fn set_default_reply(&self, text: impl Into<String>) {
        *self.default_reply.write().await = Some(text.into());
    }

    /// Requests received so far, in order.
    pub async fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.requests.read().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    fn provider(&self) -> &str {
        "mock"
    }

    fn label(&self) -> &str {
        "Mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let input_tokens = (request.prompt.len() / 4) as u32;
        self.requests.write().await.push(request);

        let next = self.replies.write().await.pop_front();
        let text = match next {
            Some(reply) => reply?,
            None => self
                .default_reply
                .read()
                .await
                .clone()
                .ok_or(LlmError::NotConfigured)?,
        };

        Ok(CompletionResponse {
            usage: LlmUsage {
                input_tokens,
                output_tokens: (text.len() / 4) as u32,
            },
            text,
            model: "mock-model".to_string(),
        })
    }
}
