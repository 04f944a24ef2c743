//! # Payload Extraction
//!
//! Locates the `JSON.parse('...')` literal embedded in a JavaScript bundle
//! and reads the compressed `content` field out of it. This is a textual
//! capture, not a JavaScript parser: the embedding shape is fixed.

use crate::errors::DocFetchError;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Matches the first `JSON.parse('<payload>')` call, across newlines.
const PAYLOAD_PATTERN: &str = r"(?s)JSON\.parse\('(.+?)'\)";

/// The JSON object recovered from the document. Only `content` is modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedPayload {
    pub content: String,
}

impl EmbeddedPayload {
    /// Parses the captured literal. A non-string, empty or absent `content`
    /// is a `MissingContent` error.
    pub fn from_json(raw: &str) -> Result<Self, DocFetchError> {
        let value: Value = serde_json::from_str(raw)?;
        let content = value
            .get("content")
            .and_then(Value::as_str)
            .filter(|content| !content.is_empty())
            .ok_or(DocFetchError::MissingContent)?;
        Ok(Self {
            content: content.to_string(),
        })
    }
}

/// Returns the text captured between the quotes of the first
/// `JSON.parse('...')` call, unmodified.
pub fn extract_payload(document: &str) -> Result<&str, DocFetchError> {
    let re = Regex::new(PAYLOAD_PATTERN)?;
    let captured = re
        .captures(document)
        .and_then(|caps| caps.get(1))
        .ok_or(DocFetchError::PayloadNotFound)?;
    debug!(
        offset = captured.start(),
        len = captured.len(),
        "Found embedded JSON.parse payload"
    );
    Ok(captured.as_str())
}
