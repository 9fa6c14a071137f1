//! Raw wire shapes for per-technique analysis responses

use serde::{Deserialize, Serialize};

use crate::model::analysis::ManipulationInstance;

/// Raw shape returned by one technique-analysis prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueReport {
    #[serde(default)]
    pub main_thesis: String,
    #[serde(default)]
    pub arguments: Vec<ArgumentReport>,
}

/// Per-argument finding inside a technique report.
///
/// `argument_text` is expected to reproduce an extracted argument's statement
/// verbatim; `argument_id` is the synthetic identifier the prompt asks the
/// model to echo back, and takes precedence during merging when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgumentReport {
    #[serde(default)]
    pub argument_id: Option<String>,
    pub argument_text: String,
    #[serde(default)]
    pub contains_manipulation: bool,
    #[serde(default)]
    pub manipulations: Vec<ManipulationInstance>,
}
