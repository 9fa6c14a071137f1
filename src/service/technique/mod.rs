//! Per-technique manipulation analysis using the LLM gateway
//!
//! Second stage of an analysis request: one independent gateway call per
//! technique in the schema, each re-reading the full text against the
//! extracted argument list.

use std::sync::Arc;

use crate::model::{Technique, TechniqueReport};
use crate::service::llm::PromptGateway;
use crate::service::response::parse_json_response;
use crate::service::technique::prompts::{TECHNIQUE_SYSTEM_PROMPT, build_technique_prompt};

pub mod error;
pub mod prompts;

pub use error::TechniqueAnalysisError;

/// Service analyzing a text against one manipulation technique at a time
pub struct TechniqueAnalyzer {
    gateway: Arc<dyn PromptGateway>,
}

impl TechniqueAnalyzer {
    pub fn new(gateway: Arc<dyn PromptGateway>) -> Self {
        Self { gateway }
    }

    /// Analyze the text for one technique against the extracted arguments.
    pub async fn analyze(
        &self,
        technique: Technique,
        text: &str,
        serialized_arguments: &str,
    ) -> Result<TechniqueReport, TechniqueAnalysisError> {
        let prompt = build_technique_prompt(technique, text, serialized_arguments);

        tracing::debug!(
            technique = %technique,
            prompt_length = prompt.len(),
            "Initiating technique analysis call"
        );

        let start_time = std::time::Instant::now();
        let raw = self.gateway.send(TECHNIQUE_SYSTEM_PROMPT, &prompt).await?;

        let report = match parse_json_response::<TechniqueReport>(&raw) {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(
                    technique = %technique,
                    error = %e,
                    raw_length = e.raw_response.len(),
                    "Technique analysis returned an unparseable response"
                );
                return Err(e.into());
            }
        };

        tracing::debug!(
            technique = %technique,
            elapsed_ms = start_time.elapsed().as_millis(),
            flagged_arguments = report
                .arguments
                .iter()
                .filter(|a| a.contains_manipulation)
                .count(),
            "Technique analysis completed"
        );

        Ok(report)
    }
}
