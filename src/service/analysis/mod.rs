//! Orchestrates one full manipulation analysis request
//!
//! One extraction call builds the skeleton, then all techniques fan out
//! concurrently against the same immutable extraction output. Results are
//! collected behind a barrier and merged by this task alone; a failed
//! technique leaves its column empty instead of aborting the request.

use std::sync::Arc;

use futures::future::join_all;

use crate::model::{ExtractedArguments, Technique, UnifiedAnalysis};
use crate::service::extraction::ArgumentExtractor;
use crate::service::llm::PromptGateway;
use crate::service::score::compute_score;
use crate::service::technique::TechniqueAnalyzer;

pub mod error;
pub mod merge;

pub use error::AnalysisError;

/// Service running the two-stage analysis pipeline
pub struct AnalysisService {
    extractor: ArgumentExtractor,
    analyzer: TechniqueAnalyzer,
}

impl AnalysisService {
    pub fn new(gateway: Arc<dyn PromptGateway>) -> Self {
        Self {
            extractor: ArgumentExtractor::new(Arc::clone(&gateway)),
            analyzer: TechniqueAnalyzer::new(gateway),
        }
    }

    /// Run the full analysis: extraction, per-technique fan-out, merge, score.
    pub async fn analyze_text(&self, text: &str) -> Result<UnifiedAnalysis, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyText);
        }

        let start_time = std::time::Instant::now();

        let extraction = self.extractor.extract(text).await?;
        let mut analysis = merge::build_skeleton(&extraction);
        let serialized_arguments = serialize_arguments(&extraction);

        let technique_calls: Vec<_> = Technique::ALL
            .into_iter()
            .map(|technique| {
                let serialized = serialized_arguments.as_str();
                async move {
                    (
                        technique,
                        self.analyzer.analyze(technique, text, serialized).await,
                    )
                }
            })
            .collect();
        let results = join_all(technique_calls).await;

        for (technique, result) in results {
            match result {
                Ok(report) => merge::merge_report(&mut analysis, technique, report),
                Err(e) => {
                    tracing::warn!(
                        technique = %technique,
                        error = %e,
                        "Technique analysis failed, continuing without it"
                    );
                    analysis.failed_techniques.push(technique);
                }
            }
        }

        analysis.score = Some(compute_score(&analysis));

        tracing::info!(
            elapsed_ms = start_time.elapsed().as_millis(),
            argument_count = analysis.arguments.len(),
            failed_techniques = analysis.failed_techniques.len(),
            "Text analysis completed"
        );

        Ok(analysis)
    }
}

/// Render the extracted arguments as the JSON listing passed to technique
/// prompts, with the synthetic identifiers the merge step matches on.
fn serialize_arguments(extraction: &ExtractedArguments) -> String {
    let listing: Vec<serde_json::Value> = extraction
        .arguments
        .iter()
        .enumerate()
        .map(|(index, argument)| {
            serde_json::json!({
                "argument_id": merge::argument_id(index),
                "statement": argument.statement,
                "connection_to_hypothesis": argument.connection_to_hypothesis,
            })
        })
        .collect();

    serde_json::to_string_pretty(&listing).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskLevel;
    use crate::service::extraction::prompts::EXTRACTION_SYSTEM_PROMPT;
    use crate::service::llm::GatewayError;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Gateway scripted per prompt: extraction prompts get the canned
    /// extraction response, technique prompts are routed by the technique
    /// definition they embed.
    struct ScriptedGateway {
        extraction_response: String,
        technique_responses: HashMap<Technique, String>,
        failing_techniques: Vec<Technique>,
    }

    impl ScriptedGateway {
        fn new(extraction_response: &str) -> Self {
            Self {
                extraction_response: extraction_response.to_string(),
                technique_responses: HashMap::new(),
                failing_techniques: Vec::new(),
            }
        }

        fn with_report(mut self, technique: Technique, response: &str) -> Self {
            self.technique_responses
                .insert(technique, response.to_string());
            self
        }

        fn with_failing(mut self, technique: Technique) -> Self {
            self.failing_techniques.push(technique);
            self
        }
    }

    #[async_trait]
    impl PromptGateway for ScriptedGateway {
        async fn send(&self, system: &str, prompt: &str) -> Result<String, GatewayError> {
            if system == EXTRACTION_SYSTEM_PROMPT {
                return Ok(self.extraction_response.clone());
            }

            for technique in Technique::ALL {
                if prompt.contains(technique.definition()) {
                    if self.failing_techniques.contains(&technique) {
                        return Err(GatewayError::RequestFailed("quota exceeded".to_string()));
                    }
                    return Ok(self
                        .technique_responses
                        .get(&technique)
                        .cloned()
                        .unwrap_or_else(|| no_findings_report()));
                }
            }

            Err(GatewayError::RequestFailed("unexpected prompt".to_string()))
        }
    }

    const TWO_ARGUMENT_EXTRACTION: &str = r#"{
        "main_hypothesis": {"statement": "X"},
        "arguments": [
            {"_type": "primary", "statement": "A", "connection_to_hypothesis": "supports X"},
            {"_type": "secondary", "statement": "B", "connection_to_hypothesis": "supports X"}
        ]
    }"#;

    fn no_findings_report() -> String {
        r#"{
            "main_thesis": "X",
            "arguments": [
                {"argument_id": "arg-1", "argument_text": "A", "contains_manipulation": false, "manipulations": []},
                {"argument_id": "arg-2", "argument_text": "B", "contains_manipulation": false, "manipulations": []}
            ]
        }"#
        .to_string()
    }

    fn ad_populum_flags_first_argument() -> String {
        r#"```json
{
    "main_thesis": "X",
    "arguments": [
        {"argument_id": "arg-1", "argument_text": "A", "contains_manipulation": true,
         "manipulations": [{"instance": "everyone knows", "explanation": "popularity appeal"}]},
        {"argument_id": "arg-2", "argument_text": "B", "contains_manipulation": false, "manipulations": []}
    ]
}
```"#
            .to_string()
    }

    fn service(gateway: ScriptedGateway) -> AnalysisService {
        AnalysisService::new(Arc::new(gateway))
    }

    #[tokio::test]
    async fn test_single_flagged_technique_merges_and_scores() {
        let service = service(
            ScriptedGateway::new(TWO_ARGUMENT_EXTRACTION)
                .with_report(Technique::AdPopulum, &ad_populum_flags_first_argument()),
        );

        let analysis = service.analyze_text("some text").await.unwrap();

        assert_eq!(analysis.thesis, "X");
        assert_eq!(analysis.arguments.len(), 2);
        assert_eq!(analysis.arguments[0].manipulations.ad_populum.len(), 1);
        assert_eq!(
            analysis.arguments[0].manipulations.detected_technique_count(),
            1
        );
        assert_eq!(
            analysis.arguments[1].manipulations.detected_technique_count(),
            0
        );
        assert!(analysis.failed_techniques.is_empty());

        let score = analysis.score.unwrap();
        assert_eq!(score.overall_score, 24.0);
        assert_eq!(score.affected_arguments_ratio, 0.5);
        assert_eq!(score.manipulation_density, 0.05);
        assert_eq!(score.risk_level, RiskLevel::Moderate);
    }

    #[tokio::test]
    async fn test_every_argument_carries_the_full_technique_schema() {
        let service = service(ScriptedGateway::new(TWO_ARGUMENT_EXTRACTION));

        let analysis = service.analyze_text("some text").await.unwrap();
        let value = serde_json::to_value(&analysis).unwrap();

        for argument in value["arguments"].as_array().unwrap() {
            let manipulations = argument["manipulations"].as_object().unwrap();
            assert_eq!(manipulations.len(), Technique::COUNT);
            for technique in Technique::ALL {
                assert!(manipulations.contains_key(technique.id()));
            }
        }
    }

    #[tokio::test]
    async fn test_failed_technique_is_isolated_and_reported() {
        let service = service(
            ScriptedGateway::new(TWO_ARGUMENT_EXTRACTION)
                .with_report(Technique::AdPopulum, &ad_populum_flags_first_argument())
                .with_failing(Technique::StorkFallacy),
        );

        let analysis = service.analyze_text("some text").await.unwrap();

        assert_eq!(analysis.failed_techniques, vec![Technique::StorkFallacy]);
        // The other techniques still merged normally
        assert_eq!(analysis.arguments[0].manipulations.ad_populum.len(), 1);
        assert!(analysis.score.is_some());
    }

    #[tokio::test]
    async fn test_unparseable_technique_response_is_isolated() {
        let service = service(
            ScriptedGateway::new(TWO_ARGUMENT_EXTRACTION)
                .with_report(Technique::FalseDilemma, "I refuse to answer in JSON"),
        );

        let analysis = service.analyze_text("some text").await.unwrap();

        assert_eq!(analysis.failed_techniques, vec![Technique::FalseDilemma]);
        assert_eq!(analysis.arguments.len(), 2);
    }

    #[tokio::test]
    async fn test_extraction_failure_aborts_the_request() {
        let service = service(ScriptedGateway::new("the model rambled instead of JSON"));

        let err = service.analyze_text("some text").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected_before_any_gateway_call() {
        let service = service(ScriptedGateway::new("never used"));

        let err = service.analyze_text("   \n\t ").await.unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyText));
    }

    #[tokio::test]
    async fn test_identical_responses_produce_identical_analyses() {
        let build = || {
            service(
                ScriptedGateway::new(TWO_ARGUMENT_EXTRACTION)
                    .with_report(Technique::AdPopulum, &ad_populum_flags_first_argument()),
            )
        };

        let first = build().analyze_text("some text").await.unwrap();
        let second = build().analyze_text("some text").await.unwrap();

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_zero_arguments_yields_zero_score() {
        let service = service(ScriptedGateway::new(
            r#"{"main_hypothesis": {"statement": "X"}, "arguments": []}"#,
        ));

        let analysis = service.analyze_text("some text").await.unwrap();

        assert!(analysis.arguments.is_empty());
        let score = analysis.score.unwrap();
        assert_eq!(score.overall_score, 0.0);
        assert_eq!(score.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_serialized_arguments_carry_ids_and_statements() {
        let extraction: ExtractedArguments =
            serde_json::from_str(TWO_ARGUMENT_EXTRACTION).unwrap();
        let listing = serialize_arguments(&extraction);

        assert!(listing.contains("arg-1"));
        assert!(listing.contains("arg-2"));
        assert!(listing.contains("\"statement\": \"A\""));
    }
}
