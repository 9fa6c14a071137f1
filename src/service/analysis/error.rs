//! Error types for the analysis orchestrator

use thiserror::Error;

use crate::service::extraction::ExtractionError;

/// Error type for a full analysis request.
///
/// Only extraction failures abort a request; per-technique failures are
/// isolated and reported through `UnifiedAnalysis::failed_techniques`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("input text is empty")]
    EmptyText,

    #[error("argument extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}
