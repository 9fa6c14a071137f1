pub mod analysis;
pub mod config;
pub mod extraction;
pub mod report;
pub mod score;
pub mod technique;

pub use analysis::{AnalyzedArgument, ArgumentManipulations, ManipulationInstance, UnifiedAnalysis};
pub use config::Config;
pub use extraction::{ArgumentKind, ExtractedArgument, ExtractedArguments, MainHypothesis};
pub use report::{ArgumentReport, TechniqueReport};
pub use score::{RiskLevel, ScoreRecord};
pub use technique::Technique;
