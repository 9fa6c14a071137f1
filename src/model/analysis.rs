//! Unified analysis output returned by the orchestrator

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::extraction::ArgumentKind;
use crate::model::score::ScoreRecord;
use crate::model::technique::Technique;

/// One concrete excerpt flagged as exhibiting a technique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ManipulationInstance {
    /// Quoted text from the analyzed document.
    pub instance: String,
    pub explanation: String,
}

/// Per-technique manipulation instances for a single argument.
///
/// One column per technique in the active schema. Modeling the map as a
/// struct makes the completeness invariant (every technique key present,
/// possibly empty) hold by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArgumentManipulations {
    #[serde(default)]
    pub ad_populum: Vec<ManipulationInstance>,
    #[serde(default)]
    pub unspecified_authority_fallacy: Vec<ManipulationInstance>,
    #[serde(default)]
    pub appeal_to_pride: Vec<ManipulationInstance>,
    #[serde(default)]
    pub false_dilemma: Vec<ManipulationInstance>,
    #[serde(default)]
    pub cherry_picking_data: Vec<ManipulationInstance>,
    #[serde(default)]
    pub stork_fallacy: Vec<ManipulationInstance>,
    #[serde(default)]
    pub fallacy_of_composition: Vec<ManipulationInstance>,
    #[serde(default)]
    pub fallacy_of_division: Vec<ManipulationInstance>,
    #[serde(default)]
    pub hasty_generalization: Vec<ManipulationInstance>,
    #[serde(default)]
    pub texas_sharpshooter_fallacy: Vec<ManipulationInstance>,
}

impl ArgumentManipulations {
    pub fn get(&self, technique: Technique) -> &Vec<ManipulationInstance> {
        match technique {
            Technique::AdPopulum => &self.ad_populum,
            Technique::UnspecifiedAuthorityFallacy => &self.unspecified_authority_fallacy,
            Technique::AppealToPride => &self.appeal_to_pride,
            Technique::FalseDilemma => &self.false_dilemma,
            Technique::CherryPickingData => &self.cherry_picking_data,
            Technique::StorkFallacy => &self.stork_fallacy,
            Technique::FallacyOfComposition => &self.fallacy_of_composition,
            Technique::FallacyOfDivision => &self.fallacy_of_division,
            Technique::HastyGeneralization => &self.hasty_generalization,
            Technique::TexasSharpshooterFallacy => &self.texas_sharpshooter_fallacy,
        }
    }

    pub fn get_mut(&mut self, technique: Technique) -> &mut Vec<ManipulationInstance> {
        match technique {
            Technique::AdPopulum => &mut self.ad_populum,
            Technique::UnspecifiedAuthorityFallacy => &mut self.unspecified_authority_fallacy,
            Technique::AppealToPride => &mut self.appeal_to_pride,
            Technique::FalseDilemma => &mut self.false_dilemma,
            Technique::CherryPickingData => &mut self.cherry_picking_data,
            Technique::StorkFallacy => &mut self.stork_fallacy,
            Technique::FallacyOfComposition => &mut self.fallacy_of_composition,
            Technique::FallacyOfDivision => &mut self.fallacy_of_division,
            Technique::HastyGeneralization => &mut self.hasty_generalization,
            Technique::TexasSharpshooterFallacy => &mut self.texas_sharpshooter_fallacy,
        }
    }

    /// Iterate columns in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Technique, &[ManipulationInstance])> + '_ {
        Technique::ALL
            .into_iter()
            .map(move |technique| (technique, self.get(technique).as_slice()))
    }

    /// Number of techniques with at least one flagged instance.
    ///
    /// An argument with three instances of one technique and none of the
    /// others counts 1 here, not 3.
    pub fn detected_technique_count(&self) -> usize {
        self.iter().filter(|(_, instances)| !instances.is_empty()).count()
    }
}

/// One extracted argument with its per-technique manipulation findings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzedArgument {
    #[serde(rename = "_type")]
    pub kind: ArgumentKind,
    /// Verbatim statement text; the join key used when merging reports.
    pub statement: String,
    pub connection_to_hypothesis: String,
    pub manipulations: ArgumentManipulations,
}

/// The merged result of one full analysis request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnifiedAnalysis {
    pub thesis: String,
    pub arguments: Vec<AnalyzedArgument>,
    /// Techniques whose analysis call failed; their columns stay empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_techniques: Vec<Technique>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreRecord>,
}
