//! Adjudication result type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rules::Decision;

/// Amount reported by a degraded adjudication.
pub const ZERO_AMOUNT: &str = "₹0";

/// The semantic adjudicator's reply.
///
/// Kept as the JSON object the oracle returned: fields it omitted stay absent
/// and extra fields pass through untouched. Typed accessors read the five
/// expected fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjudicationResult(Map<String, Value>);

impl AdjudicationResult {
    pub fn from_object(object: Map<String, Value>) -> Self {
        Self(object)
    }

    /// The fixed result for a failed oracle call or unusable reply.
    pub fn degraded(oracle: &str, message: impl std::fmt::Display) -> Self {
        let mut object = Map::new();
        object.insert("decision".into(), Value::from(Decision::Rejected.as_str()));
        object.insert(
            "justification".into(),
            Value::from(format!("{} Error: {}", oracle, message)),
        );
        object.insert("amount".into(), Value::from(ZERO_AMOUNT));
        object.insert("matched_clause".into(), Value::from(""));
        object.insert("similarity_score".into(), Value::from(0.0));
        Self(object)
    }

    /// Parsed verdict, if present and recognizable.
    pub fn decision(&self) -> Option<Decision> {
        self.0.get("decision")?.as_str().and_then(Decision::parse)
    }

    pub fn justification(&self) -> Option<&str> {
        self.0.get("justification")?.as_str()
    }

    /// Payout estimate. Numbers are rendered as text.
    pub fn amount(&self) -> Option<String> {
        match self.0.get("amount")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Matched clause; empty when absent or not a string.
    pub fn matched_clause(&self) -> &str {
        self.0
            .get("matched_clause")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn similarity_score(&self) -> Option<f64> {
        self.0.get("similarity_score")?.as_f64()
    }

    /// All fields, in the shape the oracle returned them.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
