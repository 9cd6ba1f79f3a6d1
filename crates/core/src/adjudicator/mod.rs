//! Semantic adjudication of a claim against full policy text.
//!
//! The adjudicator is an external oracle. The adapter here owns its contract:
//! one attempt per call, the reply parsed as a JSON object, and any failure
//! folded into a fixed "rejected" result instead of an error.

mod llm_adjudicator;
mod prompt;
mod types;

use async_trait::async_trait;

pub use llm_adjudicator::LlmAdjudicator;
pub use prompt::build_adjudication_prompt;
pub use types::{AdjudicationResult, ZERO_AMOUNT};

/// Produces a semantic verdict for a claim query against policy text.
#[async_trait]
pub trait Adjudicator: Send + Sync {
    /// Name of this adjudicator for logging/metrics.
    fn name(&self) -> &str;

    /// Adjudicate a claim. Infallible by contract: transport and parse
    /// failures come back as [`AdjudicationResult::degraded`].
    async fn adjudicate(&self, policy_text: &str, query_text: &str) -> AdjudicationResult;
}
