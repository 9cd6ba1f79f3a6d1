//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Pipeline (evaluations, extraction, rule engine, verdict agreement)
//! - External services (LLM adjudication and entity extraction)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// Pipeline Metrics
// =============================================================================

/// Evaluations total by outcome.
pub static EVALUATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("claimwise_evaluations_total", "Total claim evaluations"),
        &["outcome"], // "completed", "failed"
    )
    .unwrap()
});

/// End-to-end evaluation duration in seconds.
pub static EVALUATION_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "claimwise_evaluation_duration_seconds",
            "Duration of full claim evaluations",
        )
        .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["outcome"],
    )
    .unwrap()
});

/// Text extraction failures by scope.
pub static EXTRACTION_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "claimwise_extraction_failures_total",
            "Total document text extraction failures",
        ),
        &["scope"], // "page", "document"
    )
    .unwrap()
});

/// Rule engine decisions by verdict.
pub static RULE_DECISIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("claimwise_rule_decisions_total", "Total rule engine decisions"),
        &["decision"], // "approved", "rejected"
    )
    .unwrap()
});

/// Whether the semantic and rule-based verdicts agreed.
pub static VERDICT_AGREEMENT: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "claimwise_verdict_agreement_total",
            "Semantic vs rule-based verdict comparison",
        ),
        &["agreement"], // "agree", "disagree", "unknown"
    )
    .unwrap()
});

// =============================================================================
// External Service Metrics
// =============================================================================

/// Adjudications total by provider and status.
pub static ADJUDICATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("claimwise_adjudications_total", "Total semantic adjudications"),
        &["provider", "status"], // status: "success", "degraded"
    )
    .unwrap()
});

/// External service request duration.
pub static EXTERNAL_SERVICE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "claimwise_external_service_duration_seconds",
            "Duration of external service calls",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["service", "operation"],
    )
    .unwrap()
});

/// LLM tokens used.
pub static LLM_TOKENS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("claimwise_llm_tokens_total", "Total LLM tokens used"),
        &["provider", "direction"], // direction: "input", "output"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Pipeline
        Box::new(EVALUATIONS_TOTAL.clone()),
        Box::new(EVALUATION_DURATION.clone()),
        Box::new(EXTRACTION_FAILURES.clone()),
        Box::new(RULE_DECISIONS.clone()),
        Box::new(VERDICT_AGREEMENT.clone()),
        // External services
        Box::new(ADJUDICATIONS_TOTAL.clone()),
        Box::new(EXTERNAL_SERVICE_DURATION.clone()),
        Box::new(LLM_TOKENS.clone()),
    ]
}
