// src/analysis/mod.rs
use serde::{Deserialize, Serialize};

pub mod analyzer;
pub mod classifier;
pub mod features;
pub mod keywords;
pub mod report;
pub mod scorer;

pub use analyzer::PersonalityAnalyzer;
pub use classifier::{ExperienceLevel, Industry};
pub use features::FeatureSet;
pub use scorer::{Trait, TraitScores};

/// Everything produced by one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityAnalysis {
    pub scores: TraitScores,
    pub experience_level: ExperienceLevel,
    pub industry: Industry,
    pub features: FeatureSet,
    pub report: String,
}

impl PersonalityAnalysis {
    pub fn dominant_trait(&self) -> (Trait, u32) {
        self.scores.dominant()
    }

    /// Dominant trait as shown in history listings, e.g. `Openness (72.0)`.
    pub fn dominant_trait_label(&self) -> String {
        let (trait_, score) = self.dominant_trait();
        format!("{} ({:.1})", trait_, f64::from(score))
    }
}

/// Analyse `text` with the default analyzer.
pub fn analyze(text: &str) -> PersonalityAnalysis {
    PersonalityAnalyzer::new().analyze(text)
}
