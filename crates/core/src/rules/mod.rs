//! Deterministic rule-based claim decisions.
//!
//! A three-branch table over the parsed procedure and the clause the semantic
//! adjudicator matched. Substring containment is the only signal.

mod engine;
mod types;

pub use engine::RuleEngine;
pub use types::{Decision, RuleConfig, RuleDecision};
