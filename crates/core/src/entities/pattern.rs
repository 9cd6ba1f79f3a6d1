//! Pattern-based entity extraction.
//!
//! Four independent searches over the lowercased query. Each one takes the
//! leftmost match; a miss in one never affects the others.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::types::ExtractedEntities;

/// Procedures the extractor recognizes. At the same text position, earlier
/// entries win.
pub const PROCEDURE_VOCABULARY: [&str; 5] = [
    "knee surgery",
    "heart surgery",
    "bypass",
    "replacement",
    "treatment",
];

static AGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,3})[- ]?years?[- ]?old").expect("valid age pattern"));

static PROCEDURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("({})", PROCEDURE_VOCABULARY.join("|"))).expect("valid procedure pattern")
});

static LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bin\s+([a-z][a-z ]*)").expect("valid location pattern"));

static DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+[ -]?(?:month|year)").expect("valid duration pattern"));

/// Matches the tail of an age phrase right after a "<n> year" token.
static AGE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^s?[- ]?old").expect("valid age suffix pattern"));

/// Extracts age, procedure, location and policy duration from a claim query.
#[derive(Debug, Clone, Default)]
pub struct PatternEntityExtractor;

impl PatternEntityExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse a query. Total: unmatched fields come back empty or `None`.
    pub fn extract(&self, query: &str) -> ExtractedEntities {
        let query = query.to_lowercase();

        ExtractedEntities {
            age: extract_age(&query),
            procedure: extract_procedure(&query),
            location: extract_location(&query),
            policy_duration: extract_policy_duration(&query),
        }
    }
}

fn extract_age(query: &str) -> Option<u32> {
    AGE.captures(query)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn extract_procedure(query: &str) -> String {
    PROCEDURE
        .find(query)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn extract_location(query: &str) -> String {
    LOCATION
        .captures(query)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn extract_policy_duration(query: &str) -> String {
    // "45 year old" describes the claimant, not the policy
    DURATION
        .find_iter(query)
        .find(|m| !(m.as_str().ends_with("year") && AGE_SUFFIX.is_match(&query[m.end()..])))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
