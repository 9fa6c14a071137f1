//! Prompts for per-technique manipulation analysis

use crate::model::Technique;

/// System prompt for technique analysis
pub const TECHNIQUE_SYSTEM_PROMPT: &str = r#"You are an expert in detecting manipulation and persuasion techniques in text. Your task is to:
1. Analyze the given text for manipulation techniques"#;

/// Build the analysis prompt for one technique.
///
/// `serialized_arguments` is the JSON listing of the extracted arguments,
/// passed as context only; the model is instructed to echo each argument's
/// identifier and text exactly as given, which the merge step relies upon.
pub fn build_technique_prompt(
    technique: Technique,
    text: &str,
    serialized_arguments: &str,
) -> String {
    format!(
        r#"### TASK
Focus only on the following manipulation technique:
{definition}

Analysis Request: Generate JSON Analysis of Manipulation Techniques

Please analyze the provided text and return the results in the following JSON structure:

### TEXT
{text}

The arguments of the text are
arguments: {serialized_arguments}

### OUTPUT
{{
    "main_thesis": "<str>",
    "arguments": [
        {{
            "argument_id": "<str>", exactly as received in the arguments
            "argument_text": "<str>", exactly written as received in the arguments
            "contains_manipulation": <true|false>,
            "manipulations": [
                {{
                    "instance": "<str>",
                    "explanation": "<str>"
                }}
            ]
        }}
    ]
}}"#,
        definition = technique.definition(),
    )
}
