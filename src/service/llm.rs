//! Shared LLM gateway and interaction utilities
//!
//! Provides the text-in/text-out seam between the analysis services and the
//! OpenAI API. Both the argument extractor and the technique analyzer talk to
//! the model exclusively through [`PromptGateway`].

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;
use thiserror::Error;

/// Retries after the initial attempt before a call is surfaced as failed
const MAX_RETRIES: usize = 2;

/// Error type for gateway calls
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("failed to create LLM client: {0}")]
    ClientInit(String),

    #[error("LLM request failed: {0}")]
    RequestFailed(String),
}

/// Opaque prompt-in/text-out language model gateway.
///
/// Responses are free-form text expected to contain a JSON object, possibly
/// wrapped in a code fence; interpreting them is the caller's concern.
#[async_trait]
pub trait PromptGateway: Send + Sync {
    async fn send(&self, system: &str, prompt: &str) -> Result<String, GatewayError>;
}

/// Production gateway backed by the OpenAI API
pub struct LlmGateway {
    client: openai::Client,
    model: String,
}

impl LlmGateway {
    /// Create a new gateway with the provided API key and model
    pub fn new(api_key: &str, model: &str) -> Result<Self, GatewayError> {
        let client = openai::Client::builder(api_key)
            .build()
            .map_err(|e| GatewayError::ClientInit(e.to_string()))?;

        tracing::info!(model = %model, "LLM gateway initialized");

        Ok(Self {
            client,
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl PromptGateway for LlmGateway {
    async fn send(&self, system: &str, prompt: &str) -> Result<String, GatewayError> {
        // Temperature 0 keeps extraction deterministic across retries
        let agent = self
            .client
            .agent(&self.model)
            .preamble(system)
            .temperature(0.0)
            .build();

        let start_time = std::time::Instant::now();
        let mut last_error = String::new();

        for attempt in 1..=(MAX_RETRIES + 1) {
            match agent.prompt(prompt).await {
                Ok(text) => {
                    tracing::debug!(
                        model = %self.model,
                        attempt = attempt,
                        elapsed_ms = start_time.elapsed().as_millis(),
                        prompt_length = prompt.len(),
                        response_length = text.len(),
                        "LLM call completed"
                    );
                    return Ok(text);
                }
                Err(e) => {
                    last_error = e.to_string();
                    tracing::debug!(
                        model = %self.model,
                        attempt = attempt,
                        error = %e,
                        "LLM call attempt failed"
                    );
                }
            }
        }

        tracing::error!(
            model = %self.model,
            elapsed_ms = start_time.elapsed().as_millis(),
            error = %last_error,
            "LLM call failed after retries"
        );
        Err(GatewayError::RequestFailed(last_error))
    }
}
