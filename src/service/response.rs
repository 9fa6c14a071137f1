//! Shared parsing of model responses carrying JSON
//!
//! Gateway responses are expected to be a JSON object, optionally wrapped in
//! a ```json code fence. Both the argument extractor and the technique
//! analyzer funnel their raw responses through [`parse_json_response`].

use serde::de::DeserializeOwned;
use thiserror::Error;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Error type for unparseable model responses.
///
/// Carries the raw response text so callers can inspect what the model
/// actually returned; it is never coerced into a partial result.
#[derive(Debug, Error)]
#[error("failed to parse model response as JSON: {message}")]
pub struct ParseError {
    pub message: String,
    pub raw_response: String,
}

/// Parse a raw gateway response into `T`, stripping one optional code fence.
pub fn parse_json_response<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    let json = strip_code_fence(raw);
    serde_json::from_str(json).map_err(|e| ParseError {
        message: e.to_string(),
        raw_response: raw.to_string(),
    })
}

/// Strip a leading ```json marker and trailing ``` marker if present.
/// Responses without the wrapping pass through unchanged.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if let Some(rest) = trimmed.strip_prefix(FENCE_OPEN) {
        if let Some(body) = rest.strip_suffix(FENCE_CLOSE) {
            return body.trim();
        }
        // Unterminated fence; let the JSON parser report the real damage
        return rest.trim();
    }
    trimmed
}
