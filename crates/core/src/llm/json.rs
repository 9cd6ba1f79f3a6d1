//! Tolerant JSON extraction from model replies.
//!
//! Replies often wrap the object in prose or markdown fences
//! (```` ```json ... ``` ````). Instead of stripping fence syntax, scan for the
//! first balanced `{...}` span that parses as a JSON object.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use serde_json::{Map, Value};

/// Errors from [`extract_json_object`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JsonExtractError {
    #[error("no JSON object found in reply")]
    NotFound,

    #[error("invalid JSON object: {0}")]
    Invalid(String),
}

/// Locate and parse the first JSON object embedded in `text`.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, JsonExtractError> {
    let bytes = text.as_bytes();
    let mut spans = HashMap::new();
    let mut first_error = None;

    for (start, _) in text.match_indices('{') {
        if !spans.contains_key(&start) {
            record_spans(bytes, start, &mut spans);
        }
        let Some(&Some(end)) = spans.get(&start) else {
            continue;
        };
        match serde_json::from_str::<Map<String, Value>>(&text[start..end]) {
            Ok(object) => return Ok(object),
            Err(e) => {
                first_error.get_or_insert_with(|| e.to_string());
            }
        }
    }

    Err(first_error
        .map(JsonExtractError::Invalid)
        .unwrap_or(JsonExtractError::NotFound))
}

/// Extract the first JSON object and deserialize it into `T`.
pub fn parse_json_reply<T: DeserializeOwned>(text: &str) -> Result<T, JsonExtractError> {
    let object = extract_json_object(text)?;
    serde_json::from_value(Value::Object(object))
        .map_err(|e| JsonExtractError::Invalid(e.to_string()))
}

/// Scan from the `{` at `bytes[start]` until it closes, honouring string
/// literals and escapes. Every brace opened outside a string along the way is
/// recorded in `spans` with the end of its balanced object, or `None` if the
/// input ends first.
fn record_spans(bytes: &[u8], start: usize, spans: &mut HashMap<usize, Option<usize>>) {
    let mut open = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => open.push(i),
            b'}' => {
                if let Some(opened) = open.pop() {
                    spans.insert(opened, Some(i + 1));
                }
                if open.is_empty() {
                    return;
                }
            }
            _ => {}
        }
    }
    for opened in open {
        spans.insert(opened, None);
    }
}
