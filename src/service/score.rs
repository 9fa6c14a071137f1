//! Manipulation score computation and risk-band interpretation
//!
//! Reduces a unified analysis to a bounded 0-100 composite score: 40% breadth
//! (share of affected arguments), 40% density (techniques used vs. the
//! theoretical maximum) and 20% peak concentration in a single argument.

use crate::model::{RiskLevel, ScoreRecord, Technique, UnifiedAnalysis};

const BREADTH_WEIGHT: f64 = 0.4;
const DENSITY_WEIGHT: f64 = 0.4;
const PEAK_WEIGHT: f64 = 0.2;

/// Risk bands over the overall score, lowest first. Lookup is half-open
/// `[low, high)` except the top band, which is closed so a perfect 100 still
/// lands in Extreme.
const RISK_BANDS: &[(f64, f64, RiskLevel, &str)] = &[
    (0.0, 20.0, RiskLevel::Low, "The text shows minimal signs of manipulation"),
    (20.0, 40.0, RiskLevel::Moderate, "The text contains some manipulative elements"),
    (40.0, 60.0, RiskLevel::Substantial, "The text shows significant manipulation patterns"),
    (60.0, 80.0, RiskLevel::High, "The text is heavily manipulated"),
    (80.0, 100.0, RiskLevel::Extreme, "The text shows pervasive manipulation throughout"),
];

/// Compute the score record for a unified analysis.
///
/// With no arguments every metric is zero; otherwise each argument
/// contributes the count of techniques with at least one instance.
pub fn compute_score(analysis: &UnifiedAnalysis) -> ScoreRecord {
    let total_arguments = analysis.arguments.len();
    if total_arguments == 0 {
        let (risk_level, interpretation) = interpret(Some(0.0));
        return ScoreRecord {
            overall_score: 0.0,
            manipulation_density: 0.0,
            affected_arguments_ratio: 0.0,
            average_techniques_per_argument: 0.0,
            max_techniques_in_single_argument: 0,
            risk_level,
            interpretation: interpretation.to_string(),
        };
    }

    let techniques_per_argument: Vec<usize> = analysis
        .arguments
        .iter()
        .map(|argument| argument.manipulations.detected_technique_count())
        .collect();

    let manipulated_arguments = techniques_per_argument
        .iter()
        .filter(|count| **count > 0)
        .count();
    let technique_total: usize = techniques_per_argument.iter().sum();
    let max_techniques = techniques_per_argument.iter().copied().max().unwrap_or(0);

    let affected_arguments_ratio = manipulated_arguments as f64 / total_arguments as f64;
    let average_techniques = technique_total as f64 / total_arguments as f64;
    let manipulation_density =
        technique_total as f64 / (total_arguments * Technique::COUNT) as f64;

    let overall_score = round2(
        (BREADTH_WEIGHT * affected_arguments_ratio
            + DENSITY_WEIGHT * manipulation_density
            + PEAK_WEIGHT * (max_techniques as f64 / Technique::COUNT as f64))
            * 100.0,
    );

    tracing::debug!(
        total_arguments = total_arguments,
        manipulated_arguments = manipulated_arguments,
        technique_total = technique_total,
        max_techniques = max_techniques,
        overall_score = overall_score,
        "Computed manipulation score"
    );

    let (risk_level, interpretation) = interpret(Some(overall_score));

    ScoreRecord {
        overall_score,
        manipulation_density: round3(manipulation_density),
        affected_arguments_ratio: round3(affected_arguments_ratio),
        average_techniques_per_argument: round2(average_techniques),
        max_techniques_in_single_argument: max_techniques,
        risk_level,
        interpretation: interpretation.to_string(),
    }
}

/// Select the risk band for an overall score.
///
/// An absent score maps to the Not Calculated sentinel rather than an error.
pub fn interpret(score: Option<f64>) -> (RiskLevel, &'static str) {
    let Some(score) = score else {
        return (
            RiskLevel::NotCalculated,
            "Score calculation could not be completed",
        );
    };

    let last = RISK_BANDS.len() - 1;
    for (i, (low, high, level, text)) in RISK_BANDS.iter().enumerate() {
        let in_band = if i == last {
            score >= *low && score <= *high
        } else {
            score >= *low && score < *high
        };
        if in_band {
            return (*level, *text);
        }
    }

    (RiskLevel::NotCalculated, "Score outside expected range")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
