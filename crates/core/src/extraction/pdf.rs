//! PDF text extraction backed by lopdf.

use lopdf::Document;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use thiserror::Error;
use tracing::{debug, warn};

use super::{normalize_text, TextExtractor};
use crate::metrics::EXTRACTION_FAILURES;

/// Why a page or a whole document produced no text.
#[derive(Debug, Error)]
enum DecodeError {
    #[error(transparent)]
    Pdf(#[from] lopdf::Error),

    #[error("decoder panicked: {0}")]
    Panicked(String),
}

/// Run a lopdf call, turning a panic inside the decoder into an error.
fn decode<T>(f: impl FnOnce() -> Result<T, lopdf::Error>) -> Result<T, DecodeError> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result.map_err(DecodeError::from),
        Err(panic) => Err(DecodeError::Panicked(panic_message(panic))),
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Extracts text from every page of a PDF, in page order.
///
/// A page that fails to decode contributes nothing; a document that cannot be
/// loaded at all yields an empty string. Panics raised by the decoder on
/// malformed input count as failures of the page or document that raised
/// them.
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Concatenate raw page text without normalization.
    fn raw_text(&self, document: &[u8]) -> Result<String, DecodeError> {
        let (doc, pages) = decode(|| {
            let doc = Document::load_mem(document)?;
            let pages = doc.get_pages();
            Ok((doc, pages))
        })?;
        debug!(page_count = pages.len(), "Loaded PDF document");

        let mut text = String::new();
        for page_number in pages.keys() {
            match decode(|| doc.extract_text(&[*page_number])) {
                Ok(page_text) => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Err(e) => {
                    debug!(page = page_number, error = %e, "Page yielded no text");
                    EXTRACTION_FAILURES.with_label_values(&["page"]).inc();
                }
            }
        }
        Ok(text)
    }
}

impl TextExtractor for PdfTextExtractor {
    fn name(&self) -> &str {
        "pdf"
    }

    fn extract(&self, document: &[u8]) -> String {
        match self.raw_text(document) {
            Ok(text) => normalize_text(&text),
            Err(e) => {
                warn!(error = %e, bytes = document.len(), "PDF extraction error");
                EXTRACTION_FAILURES.with_label_values(&["document"]).inc();
                String::new()
            }
        }
    }
}
