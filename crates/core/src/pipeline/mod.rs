//! Claim adjudication pipeline.
//!
//! ```text
//! document bytes ──► TextExtractor ──► policy text ─┐
//!                                                   ├─► Adjudicator ──► AdjudicationResult ─┐
//! query ──────────┬─────────────────────────────────┘                                       │
//!                 ├─► PatternEntityExtractor ──► parsed_query ─► RuleEngine(matched_clause) ─┤
//!                 └─► LlmEntityExtractor (optional) ──► semantic_query ─────────────────────┤
//!                                                                                           ▼
//!                                                                                      FinalResult
//! ```
//!
//! The result carries two verdicts on purpose: the semantic adjudicator's at
//! the top level and the rule engine's under `rule_based_decision`. They are
//! never reconciled; callers choose which to trust.

mod config;
mod orchestrator;
mod types;

pub use config::PipelineConfig;
pub use orchestrator::ClaimPipeline;
pub use types::{EvaluationResponse, FinalResult, PipelineError};
