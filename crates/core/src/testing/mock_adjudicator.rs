//! Mock adjudicator for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::adjudicator::{AdjudicationResult, Adjudicator};

/// A recorded adjudication call for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedAdjudication {
    pub policy_text: String,
    pub query_text: String,
}

/// Mock implementation of the Adjudicator trait.
///
/// Returns a configured result and records every call.
#[derive(Debug, Default)]
pub struct MockAdjudicator {
    result: Arc<RwLock<AdjudicationResult>>,
    calls: Arc<RwLock<Vec<RecordedAdjudication>>>,
}

impl MockAdjudicator {
    pub fn new(result: AdjudicationResult) -> Self {
        Self {
            result: Arc::new(RwLock::new(result)),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn set_result(&self, result: AdjudicationResult) {
        *self.result.write().await = result;
    }

    pub async fn recorded_calls(&self) -> Vec<RecordedAdjudication> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl Adjudicator for MockAdjudicator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn adjudicate(&self, policy_text: &str, query_text: &str) -> AdjudicationResult {
        self.calls.write().await.push(RecordedAdjudication {
            policy_text: policy_text.to_string(),
            query_text: query_text.to_string(),
        });
        self.result.read().await.clone()
    }
}
