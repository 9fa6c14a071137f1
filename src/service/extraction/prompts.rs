//! Prompts for hypothesis and argument extraction

/// System prompt for argument extraction
pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"You are an expert argument analysis agent. Your task is to:
1. Analyze the given text carefully
2. Identify the main hypothesis
3. Extract supporting arguments
4. Structure your response in JSON format

Your analysis should be thorough and precise."#;

/// Build the extraction prompt embedding the text under analysis
pub fn build_extraction_prompt(text: &str) -> String {
    format!(
        r#"### TASK
Analysis Request: Generate JSON Analysis of Text Hypothesis and Arguments

Please analyze the provided text and return the results in the following JSON structure:

### TEXT
{text}

### OUTPUT
{{
    "main_hypothesis": {{
        "statement": "<text>"
    }},
    "arguments": [
        {{
            "_type": "<primary|secondary>",
            "statement": "<text>",
            "connection_to_hypothesis": "<text>"
        }}
    ]
}}"#
    )
}
