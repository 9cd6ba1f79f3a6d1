//! Claim query entity extraction.
//!
//! Two independent strategies read the same query:
//! - [`PatternEntityExtractor`]: synchronous, total, pattern matching over the
//!   lowercased query. Its output is the `parsed_query` of every result.
//! - [`LlmEntityExtractor`]: always-awaited model call, optional. Its output is
//!   reported separately and never merged into `parsed_query`.

mod pattern;
mod semantic;
mod types;

pub use pattern::{PatternEntityExtractor, PROCEDURE_VOCABULARY};
pub use semantic::LlmEntityExtractor;
pub use types::{ExtractedEntities, SemanticEntities, SemanticParse};
