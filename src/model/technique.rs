//! The manipulation technique schema
//!
//! The `Technique` enum is the single source of truth for the set of
//! techniques evaluated against a text. The skeleton builder, the merge step
//! and the score normalizer all derive their shape from `Technique::ALL`, so
//! adding a variant here (plus its column in `ArgumentManipulations`) extends
//! the whole pipeline consistently.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One named category of rhetorical manipulation, evaluated independently
/// against the whole text and argument set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    AdPopulum,
    UnspecifiedAuthorityFallacy,
    AppealToPride,
    FalseDilemma,
    CherryPickingData,
    StorkFallacy,
    FallacyOfComposition,
    FallacyOfDivision,
    HastyGeneralization,
    TexasSharpshooterFallacy,
}

impl Technique {
    /// The active schema, in skeleton/report order.
    pub const ALL: [Technique; 10] = [
        Technique::AdPopulum,
        Technique::UnspecifiedAuthorityFallacy,
        Technique::AppealToPride,
        Technique::FalseDilemma,
        Technique::CherryPickingData,
        Technique::StorkFallacy,
        Technique::FallacyOfComposition,
        Technique::FallacyOfDivision,
        Technique::HastyGeneralization,
        Technique::TexasSharpshooterFallacy,
    ];

    /// Schema size, used as the per-argument normalizer in scoring.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable identifier, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Technique::AdPopulum => "ad_populum",
            Technique::UnspecifiedAuthorityFallacy => "unspecified_authority_fallacy",
            Technique::AppealToPride => "appeal_to_pride",
            Technique::FalseDilemma => "false_dilemma",
            Technique::CherryPickingData => "cherry_picking_data",
            Technique::StorkFallacy => "stork_fallacy",
            Technique::FallacyOfComposition => "fallacy_of_composition",
            Technique::FallacyOfDivision => "fallacy_of_division",
            Technique::HastyGeneralization => "hasty_generalization",
            Technique::TexasSharpshooterFallacy => "texas_sharpshooter_fallacy",
        }
    }

    /// Description and examples, used only as prompt content.
    pub fn definition(&self) -> &'static str {
        match self {
            Technique::AdPopulum => {
                "- Argumentum ad populum: to present a belief as true simply because it is widely accepted.\n\
                 Examples: 'Most people believe,' 'Everyone knows,' 'Everyone agrees'."
            }
            Technique::UnspecifiedAuthorityFallacy => {
                "- Unspecified Authority fallacy: relies on a vague or unnamed authority to lend credibility to a claim.\n\
                 Examples: 'Experts say,' 'Studies show' without specific sources."
            }
            Technique::AppealToPride => {
                "- Appeal to Pride: flatters the audience by implying that only intelligent, patriotic, etc. people agree.\n\
                 Examples: 'Only smart people know', 'Real patriots understand'."
            }
            Technique::FalseDilemma => {
                "- False Dilemma: presents two choices as if they were the only possibilities, when other options exist.\n\
                 Examples: 'The only option is...', 'Either we act now or we lose everything'."
            }
            Technique::CherryPickingData => {
                "- Cherry-Picking Data: selects only the data that supports the argument while ignoring contrary evidence.\n\
                 Examples: 'Studies show 90 percent success rate, proving it works'."
            }
            Technique::StorkFallacy => {
                "- Correlation vs. Causality (Stork fallacy): assumes that correlation necessarily means causation.\n\
                 Examples: 'Ice cream sales and drowning deaths both increase in summer, therefore ice cream causes drownings'."
            }
            Technique::FallacyOfComposition => {
                "- Fallacy of Composition: assumes that if each part of a whole has a quality, the whole must also have that quality.\n\
                 Examples: 'This bag contains feathers, feathers are light, therefore this bag is light'."
            }
            Technique::FallacyOfDivision => {
                "- Fallacy of Division: assumes that if a whole has a quality, all its parts must have that quality too.\n\
                 Examples: 'This boat floats, therefore every piece of this boat floats'."
            }
            Technique::HastyGeneralization => {
                "- Hasty Generalization: extends characteristics of a small sample to a larger group.\n\
                 Examples: 'I know two people from Chicago who are rude, therefore all people from Chicago must be rude'."
            }
            Technique::TexasSharpshooterFallacy => {
                "- Texas Sharpshooter Fallacy: committed when differences in data are ignored, but similarities are overemphasized.\n\
                 Example: 'A company claims their training program is highly effective by only highlighting the 5 employees who got promotions'."
            }
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
