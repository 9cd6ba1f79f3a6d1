//! Pipeline result types.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use thiserror::Error;

use crate::adjudicator::AdjudicationResult;
use crate::entities::{ExtractedEntities, SemanticParse};
use crate::rules::RuleDecision;

/// Failures that abort an evaluation. Extraction and adjudicator problems are
/// not here; those degrade in place.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text extraction aborted: {0}")]
    Extraction(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

const PARSED_QUERY: &str = "parsed_query";
const RULE_BASED_DECISION: &str = "rule_based_decision";
const SEMANTIC_QUERY: &str = "semantic_query";

/// The complete answer for one claim.
///
/// Serializes as the adjudicator's fields at the top level plus
/// `parsed_query`, `rule_based_decision` and, when enabled, `semantic_query`.
/// An adjudicator field that collides with one of those keys is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalResult {
    pub adjudication: AdjudicationResult,
    pub parsed_query: ExtractedEntities,
    pub rule_based_decision: RuleDecision,
    pub semantic_query: Option<SemanticParse>,
}

impl FinalResult {
    /// Whether the two verdicts agree. `None` when the adjudicator gave no
    /// recognizable decision.
    pub fn verdicts_agree(&self) -> Option<bool> {
        self.adjudication
            .decision()
            .map(|d| d == self.rule_based_decision.decision)
    }
}

impl Serialize for FinalResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.adjudication.fields() {
            if matches!(key.as_str(), PARSED_QUERY | RULE_BASED_DECISION | SEMANTIC_QUERY) {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(PARSED_QUERY, &self.parsed_query)?;
        map.serialize_entry(RULE_BASED_DECISION, &self.rule_based_decision)?;
        if let Some(semantic) = &self.semantic_query {
            map.serialize_entry(SEMANTIC_QUERY, semantic)?;
        }
        map.end()
    }
}

/// What a caller of `evaluate` receives: a full result or a bare error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EvaluationResponse {
    Completed(Box<FinalResult>),
    Failed { error: String },
}

impl EvaluationResponse {
    pub fn is_completed(&self) -> bool {
        matches!(self, EvaluationResponse::Completed(_))
    }

    pub fn result(&self) -> Option<&FinalResult> {
        match self {
            EvaluationResponse::Completed(result) => Some(result),
            EvaluationResponse::Failed { .. } => None,
        }
    }
}

impl From<Result<FinalResult, PipelineError>> for EvaluationResponse {
    fn from(result: Result<FinalResult, PipelineError>) -> Self {
        match result {
            Ok(result) => EvaluationResponse::Completed(Box::new(result)),
            Err(e) => EvaluationResponse::Failed {
                error: e.to_string(),
            },
        }
    }
}
