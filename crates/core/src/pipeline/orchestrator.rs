//! Sequences extraction, adjudication, entity parsing and the rule engine for
//! one claim.

use futures::FutureExt;
use sha2::{Digest, Sha256};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, Instrument};
use uuid::Uuid;

use super::types::{EvaluationResponse, FinalResult, PipelineError};
use crate::adjudicator::{Adjudicator, LlmAdjudicator};
use crate::config::Config;
use crate::entities::{LlmEntityExtractor, PatternEntityExtractor};
use crate::extraction::{PdfTextExtractor, TextExtractor};
use crate::llm::LlmClient;
use crate::metrics::{
    EVALUATIONS_TOTAL, EVALUATION_DURATION, RULE_DECISIONS, VERDICT_AGREEMENT,
};
use crate::rules::RuleEngine;

/// Number of hex digits of the document digest written to logs.
const DIGEST_PREFIX_LEN: usize = 12;

/// The claim adjudication pipeline.
///
/// Holds no per-request state; one instance serves any number of concurrent
/// evaluations.
pub struct ClaimPipeline {
    extractor: Arc<dyn TextExtractor>,
    adjudicator: Arc<dyn Adjudicator>,
    entities: PatternEntityExtractor,
    semantic: Option<LlmEntityExtractor<dyn LlmClient>>,
    rules: RuleEngine,
}

impl ClaimPipeline {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        adjudicator: Arc<dyn Adjudicator>,
        rules: RuleEngine,
    ) -> Self {
        Self {
            extractor,
            adjudicator,
            entities: PatternEntityExtractor::new(),
            semantic: None,
            rules,
        }
    }

    /// Wire the production pipeline: PDF extraction, an LLM adjudicator on
    /// `client`, and semantic entities when `[pipeline]` enables them.
    pub fn from_config(config: &Config, client: Arc<dyn LlmClient>) -> Self {
        let adjudicator = LlmAdjudicator::new(Arc::clone(&client))
            .with_max_tokens(config.llm.max_tokens)
            .with_temperature(config.llm.temperature);

        let pipeline = Self::new(
            Arc::new(PdfTextExtractor::new()),
            Arc::new(adjudicator),
            RuleEngine::new(config.rules.clone()),
        );

        if config.pipeline.semantic_entities {
            pipeline.with_semantic_entities(client)
        } else {
            pipeline
        }
    }

    /// Also extract query entities with a model, reported under
    /// `semantic_query`.
    pub fn with_semantic_entities(mut self, client: Arc<dyn LlmClient>) -> Self {
        self.semantic = Some(LlmEntityExtractor::new(client));
        self
    }

    pub fn adjudicator_name(&self) -> &str {
        self.adjudicator.name()
    }

    /// Evaluate a claim against a document.
    ///
    /// Never fails: anything that escapes the pipeline, panics included,
    /// becomes [`EvaluationResponse::Failed`].
    pub async fn evaluate(&self, query: &str, document: Vec<u8>) -> EvaluationResponse {
        let started = Instant::now();
        let result = AssertUnwindSafe(self.run(query, document))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(PipelineError::Internal(panic_message(panic))));
        self.finish(result, started)
    }

    /// Evaluate a claim against a document on disk.
    pub async fn evaluate_path(&self, query: &str, path: impl AsRef<Path>) -> EvaluationResponse {
        let started = Instant::now();
        let path = path.as_ref();
        match tokio::fs::read(path).await {
            Ok(document) => self.evaluate(query, document).await,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to read claim document");
                self.finish(Err(PipelineError::Io(e)), started)
            }
        }
    }

    /// Run the pipeline once, returning its error instead of folding it into
    /// the response.
    pub async fn run(&self, query: &str, document: Vec<u8>) -> Result<FinalResult, PipelineError> {
        let request_id = Uuid::new_v4();
        let digest = format!("{:x}", Sha256::digest(&document));
        let span = tracing::info_span!("evaluate", %request_id);

        async move {
            info!(
                document_sha256 = &digest[..DIGEST_PREFIX_LEN],
                document_bytes = document.len(),
                query_chars = query.len(),
                "Evaluating claim"
            );

            let extractor = Arc::clone(&self.extractor);
            let policy_text = tokio::task::spawn_blocking(move || extractor.extract(&document))
                .await
                .map_err(|e| PipelineError::Extraction(e.to_string()))?;
            debug!(
                extractor = self.extractor.name(),
                policy_chars = policy_text.len(),
                "Policy text extracted"
            );

            let adjudication = self.adjudicator.adjudicate(&policy_text, query).await;

            let parsed_query = self.entities.extract(query);
            let rule_based_decision = self.rules.decide(&parsed_query, adjudication.matched_clause());
            RULE_DECISIONS
                .with_label_values(&[rule_based_decision.decision.as_str()])
                .inc();

            let semantic_query = match &self.semantic {
                Some(extractor) => Some(extractor.extract(query).await),
                None => None,
            };

            let result = FinalResult {
                adjudication,
                parsed_query,
                rule_based_decision,
                semantic_query,
            };

            let agreement = match result.verdicts_agree() {
                Some(true) => "agree",
                Some(false) => "disagree",
                None => "unknown",
            };
            VERDICT_AGREEMENT.with_label_values(&[agreement]).inc();
            info!(
                rule_decision = result.rule_based_decision.decision.as_str(),
                agreement, "Claim evaluated"
            );

            Ok(result)
        }
        .instrument(span)
        .await
    }

    fn finish(
        &self,
        result: Result<FinalResult, PipelineError>,
        started: Instant,
    ) -> EvaluationResponse {
        let outcome = match &result {
            Ok(_) => "completed",
            Err(e) => {
                error!(error = %e, "Claim evaluation failed");
                "failed"
            }
        };
        EVALUATIONS_TOTAL.with_label_values(&[outcome]).inc();
        EVALUATION_DURATION
            .with_label_values(&[outcome])
            .observe(started.elapsed().as_secs_f64());
        EvaluationResponse::from(result)
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "pipeline panicked".to_string()
    }
}
