//! Error types for argument extraction

use thiserror::Error;

use crate::service::llm::GatewayError;
use crate::service::response::ParseError;

/// Error type for argument extraction.
///
/// Either variant aborts the whole analysis request: without a thesis and
/// argument skeleton there is nothing to merge technique reports into.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractionError {
    #[error("argument extraction request failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("argument extraction returned malformed JSON: {0}")]
    Parse(#[from] ParseError),
}
