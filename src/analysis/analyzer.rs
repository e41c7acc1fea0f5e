// src/analysis/analyzer.rs
use tracing::debug;

use super::classifier::{determine_experience_level, identify_industry};
use super::features::extract_features;
use super::report::generate_report;
use super::scorer::score_traits;
use super::PersonalityAnalysis;

/// Stateless entry point to the scoring pipeline.
///
/// Holds no data; every call reads the static keyword tables only, so one
/// analyzer can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalityAnalyzer;

impl PersonalityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str) -> PersonalityAnalysis {
        let features = extract_features(text);
        let scores = score_traits(text, &features);
        let experience_level = determine_experience_level(text);
        let industry = identify_industry(text);
        let report = generate_report(&scores, experience_level, industry, &features);

        debug!(
            total_words = features.total_words,
            experience_level = %experience_level,
            industry = %industry,
            "Resume analysed"
        );

        PersonalityAnalysis {
            scores,
            experience_level,
            industry,
            features,
            report,
        }
    }
}
