//! Error types for technique analysis

use thiserror::Error;

use crate::service::llm::GatewayError;
use crate::service::response::ParseError;

/// Error type for a single technique analysis call.
///
/// The orchestrator isolates these per technique: a failed call leaves that
/// technique's column empty instead of aborting the request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TechniqueAnalysisError {
    #[error("technique analysis request failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("technique analysis returned malformed JSON: {0}")]
    Parse(#[from] ParseError),
}
