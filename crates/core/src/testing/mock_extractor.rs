//! Mock text extractor for testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::extraction::TextExtractor;

/// Returns the same text for every document and counts calls.
#[derive(Debug, Default)]
pub struct MockTextExtractor {
    text: String,
    calls: AtomicUsize,
}

impl MockTextExtractor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// An extractor that behaves like an unreadable document.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextExtractor for MockTextExtractor {
    fn name(&self) -> &str {
        "mock"
    }

    fn extract(&self, _document: &[u8]) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.text.clone()
    }
}
