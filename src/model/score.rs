//! Score record derived from a unified analysis

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Composite manipulation metrics for one analysis, recomputed fresh each
/// time a unified analysis is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreRecord {
    /// Bounded composite score in `[0, 100]`.
    pub overall_score: f64,
    /// Share of the theoretical maximum techniques-per-argument in use.
    pub manipulation_density: f64,
    /// Share of arguments with at least one detected technique.
    pub affected_arguments_ratio: f64,
    pub average_techniques_per_argument: f64,
    pub max_techniques_in_single_argument: usize,
    pub risk_level: RiskLevel,
    pub interpretation: String,
}

/// Risk band selected from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    Low,
    Moderate,
    Substantial,
    High,
    Extreme,
    #[serde(rename = "Not Calculated")]
    NotCalculated,
}
