pub mod analysis;
pub mod extraction;
pub mod llm;
pub mod response;
pub mod score;
pub mod technique;

pub use analysis::AnalysisService;
pub use extraction::ArgumentExtractor;
pub use technique::TechniqueAnalyzer;
