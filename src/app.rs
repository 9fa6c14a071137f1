//! Application state and service initialization
//!
//! Centralizes service construction so the HTTP layer only wires already
//! initialized services into handlers.

use std::sync::Arc;

use crate::model::Config;
use crate::service::AnalysisService;
use crate::service::llm::LlmGateway;

/// Application state containing all services
pub struct AppState {
    /// Analysis orchestration service
    pub analysis_service: Arc<AnalysisService>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. LLM gateway initialization (requires OPENAI_API_KEY)
    /// 2. Analysis service construction
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AppError::MissingConfig("OPENAI_API_KEY"))?;

        let gateway = LlmGateway::new(&api_key, &config.model)
            .map_err(|e| AppError::InvalidConfig(e.to_string()))?;

        let analysis_service = Arc::new(AnalysisService::new(Arc::new(gateway)));

        Ok(Self { analysis_service })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
