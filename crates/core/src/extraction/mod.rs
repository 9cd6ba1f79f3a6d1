//! Policy document text extraction.
//!
//! Extraction never fails: an unreadable document degrades to empty text and
//! the pipeline carries on with it.

mod pdf;

pub use pdf::PdfTextExtractor;

/// Converts a binary document into whitespace-normalized plain text.
///
/// Implementations are synchronous and CPU-bound; the pipeline runs them on
/// the blocking thread pool.
pub trait TextExtractor: Send + Sync {
    /// Name of this extractor for logging.
    fn name(&self) -> &str;

    /// Extract the document's text. Returns an empty string when nothing
    /// could be extracted.
    fn extract(&self, document: &[u8]) -> String;
}

/// Collapse every whitespace run (newlines included) into a single space and
/// trim both ends.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
