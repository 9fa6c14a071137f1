//! Raw wire shapes for the argument-extraction response

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw shape returned by the argument-extraction prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedArguments {
    pub main_hypothesis: MainHypothesis,
    #[serde(default)]
    pub arguments: Vec<ExtractedArgument>,
}

/// The main claim the text is built around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainHypothesis {
    pub statement: String,
}

/// One supporting argument as extracted by the model.
///
/// The model is asked for `_type`, but some responses come back with a plain
/// `type` key, so both spellings are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedArgument {
    #[serde(rename = "_type", alias = "type")]
    pub kind: ArgumentKind,
    pub statement: String,
    pub connection_to_hypothesis: String,
}

/// Whether an argument supports the hypothesis directly or indirectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentKind {
    Primary,
    Secondary,
}
