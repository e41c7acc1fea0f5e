// src/analysis/report.rs
//! Plain-text personality report rendering.

use super::classifier::{ExperienceLevel, Industry};
use super::features::FeatureSet;
use super::scorer::{Trait, TraitScores};

pub const REPORT_HEADER: &str = "=== PERSONALITY ANALYSIS REPORT ===";

/// Coarse band used for both the score lines and the interpretation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Moderate,
    Low,
}

impl Level {
    pub fn from_score(score: u32) -> Self {
        if score > 70 {
            Level::High
        } else if score > 40 {
            Level::Moderate
        } else {
            Level::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::High => "High",
            Level::Moderate => "Moderate",
            Level::Low => "Low",
        }
    }
}

fn interpretation(trait_: Trait, level: Level) -> &'static str {
    match (trait_, level) {
        (Trait::Openness, Level::High) => "This candidate likely enjoys new experiences, is creative and imaginative. They may thrive in roles requiring innovation and adaptability.",
        (Trait::Openness, Level::Moderate) => "This candidate shows balanced openness to new experiences while maintaining practical focus.",
        (Trait::Openness, Level::Low) => "This candidate likely prefers routine and established methods. They may excel in structured, detail-oriented roles.",
        (Trait::Conscientiousness, Level::High) => "Highly organized and reliable. Likely to meet deadlines and maintain high quality standards.",
        (Trait::Conscientiousness, Level::Moderate) => "Shows good organizational skills with balanced flexibility.",
        (Trait::Conscientiousness, Level::Low) => "May prefer flexible work environments and spontaneous approaches.",
        (Trait::Extraversion, Level::High) => "Likely energetic and outgoing. May excel in leadership, sales, or client-facing roles.",
        (Trait::Extraversion, Level::Moderate) => "Comfortable in both individual and team settings.",
        (Trait::Extraversion, Level::Low) => "Likely prefers independent work and smaller team environments.",
        (Trait::Agreeableness, Level::High) => "Cooperative and team-oriented. Likely to work well in collaborative environments.",
        (Trait::Agreeableness, Level::Moderate) => "Balanced approach to cooperation and assertiveness.",
        (Trait::Agreeableness, Level::Low) => "May be more competitive and direct in approach. Could excel in challenging, results-driven roles.",
        (Trait::EmotionalStability, Level::High) => "Likely handles stress well and remains calm under pressure.",
        (Trait::EmotionalStability, Level::Moderate) => "Generally stable with normal stress responses.",
        (Trait::EmotionalStability, Level::Low) => "May be more sensitive to stress. Could benefit from supportive work environments.",
    }
}

/// Role groups whose score conditions hold, in report order.
pub fn recommended_roles(scores: &TraitScores) -> Vec<&'static str> {
    let openness = scores.get(Trait::Openness);
    let conscientiousness = scores.get(Trait::Conscientiousness);
    let extraversion = scores.get(Trait::Extraversion);
    let agreeableness = scores.get(Trait::Agreeableness);
    let stability = scores.get(Trait::EmotionalStability);

    let mut roles = Vec::new();
    if extraversion > 60 && agreeableness > 60 {
        roles.extend(["Team Leadership roles", "Customer Relations", "Sales and Marketing"]);
    }
    if conscientiousness > 70 && openness < 50 {
        roles.extend(["Project Management", "Quality Assurance", "Operations"]);
    }
    if openness > 70 && conscientiousness > 60 {
        roles.extend([
            "Research and Development",
            "Creative roles",
            "Innovation Management",
        ]);
    }
    if stability > 70 && conscientiousness > 60 {
        roles.extend([
            "Crisis Management",
            "High-pressure environments",
            "Strategic roles",
        ]);
    }
    roles
}

/// Render the full report.
///
/// Layout: header, one score line per trait, experience and industry lines,
/// one interpretation paragraph per trait, then role recommendations.
pub fn generate_report(
    scores: &TraitScores,
    experience_level: ExperienceLevel,
    industry: Industry,
    _features: &FeatureSet,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("{}\n", REPORT_HEADER));

    lines.push("BIG FIVE PERSONALITY TRAITS:\n".to_string());
    for (trait_, score) in scores.iter() {
        lines.push(format!(
            "• {}: {:.1}/100 ({})",
            trait_,
            f64::from(score),
            Level::from_score(score).as_str()
        ));
    }

    lines.push(format!("\nEXPERIENCE LEVEL: {}", experience_level));
    lines.push(format!("LIKELY INDUSTRY: {}", industry));

    lines.push("\n=== DETAILED TRAIT ANALYSIS ===\n".to_string());
    for (trait_, score) in scores.iter() {
        let level = Level::from_score(score);
        lines.push(format!(
            "{} ({}): {}",
            trait_.as_str().to_uppercase(),
            level.as_str(),
            interpretation(trait_, level)
        ));
    }

    lines.push("\n=== ROLE RECOMMENDATIONS ===\n".to_string());
    for role in recommended_roles(scores) {
        lines.push(format!("• {}", role));
    }

    lines.join("\n")
}
