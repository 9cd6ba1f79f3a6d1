//! Entity record types.

use serde::{Deserialize, Serialize};

/// Structured fields parsed from a claim query by pattern matching.
///
/// Absent values are explicit: `age` is `None`, the string fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub age: Option<u32>,
    pub procedure: String,
    pub location: String,
    pub policy_duration: String,
}

/// Fields a model extracted from a claim query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticEntities {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub procedure: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub policy_duration_months: Option<u32>,
}

/// Outcome of semantic entity extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SemanticParse {
    Parsed(SemanticEntities),
    Failed { error: String, raw_response: String },
}

impl SemanticParse {
    pub(crate) fn failed(raw_response: impl Into<String>) -> Self {
        SemanticParse::Failed {
            error: "Failed to parse semantic response".to_string(),
            raw_response: raw_response.into(),
        }
    }

    pub fn entities(&self) -> Option<&SemanticEntities> {
        match self {
            SemanticParse::Parsed(entities) => Some(entities),
            SemanticParse::Failed { .. } => None,
        }
    }
}
