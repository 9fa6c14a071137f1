//! Hypothesis and argument extraction using the LLM gateway
//!
//! First stage of an analysis request: one gateway call that decomposes the
//! input text into a main hypothesis and its supporting arguments.

use std::sync::Arc;

use crate::model::ExtractedArguments;
use crate::service::extraction::prompts::{EXTRACTION_SYSTEM_PROMPT, build_extraction_prompt};
use crate::service::llm::PromptGateway;
use crate::service::response::parse_json_response;

pub mod error;
pub mod prompts;

pub use error::ExtractionError;

/// Service extracting the thesis and argument list from a text
pub struct ArgumentExtractor {
    gateway: Arc<dyn PromptGateway>,
}

impl ArgumentExtractor {
    pub fn new(gateway: Arc<dyn PromptGateway>) -> Self {
        Self { gateway }
    }

    /// Extract the main hypothesis and supporting arguments from a text.
    pub async fn extract(&self, text: &str) -> Result<ExtractedArguments, ExtractionError> {
        let prompt = build_extraction_prompt(text);

        tracing::debug!(
            text_length = text.len(),
            prompt_length = prompt.len(),
            "Initiating argument extraction call"
        );

        let start_time = std::time::Instant::now();
        let raw = self.gateway.send(EXTRACTION_SYSTEM_PROMPT, &prompt).await?;

        let extraction = match parse_json_response::<ExtractedArguments>(&raw) {
            Ok(extraction) => extraction,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    raw_length = e.raw_response.len(),
                    "Argument extraction returned an unparseable response"
                );
                return Err(e.into());
            }
        };

        tracing::info!(
            elapsed_ms = start_time.elapsed().as_millis(),
            argument_count = extraction.arguments.len(),
            "Argument extraction completed"
        );

        Ok(extraction)
    }
}
