// src/analysis/classifier.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use super::keywords::{self, count_occurrences};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Senior Level")]
    Senior,
    #[serde(rename = "Mid Level")]
    Mid,
    #[serde(rename = "Entry Level")]
    Entry,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Senior => "Senior Level",
            ExperienceLevel::Mid => "Mid Level",
            ExperienceLevel::Entry => "Entry Level",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Industry {
    Tech,
    Business,
    Creative,
    Research,
    General,
}

impl Industry {
    /// Categories with keyword lists, in tie-break order.
    pub const SCORED: [Industry; 4] = [
        Industry::Tech,
        Industry::Business,
        Industry::Creative,
        Industry::Research,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Tech => "Tech",
            Industry::Business => "Business",
            Industry::Creative => "Creative",
            Industry::Research => "Research",
            Industry::General => "General",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Industry::Tech => keywords::TECH,
            Industry::Business => keywords::BUSINESS,
            Industry::Creative => keywords::CREATIVE,
            Industry::Research => keywords::RESEARCH,
            Industry::General => &[],
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority from title vocabulary.
///
/// Senior needs a strict lead over both other tallies; otherwise mid must beat
/// junior. Every remaining case, ties included, is entry level.
pub fn determine_experience_level(text: &str) -> ExperienceLevel {
    let folded = text.to_lowercase();
    let senior = count_occurrences(&folded, keywords::SENIOR);
    let mid = count_occurrences(&folded, keywords::MID);
    let junior = count_occurrences(&folded, keywords::JUNIOR);

    if senior > mid && senior > junior {
        ExperienceLevel::Senior
    } else if mid > junior {
        ExperienceLevel::Mid
    } else {
        ExperienceLevel::Entry
    }
}

/// Industry with the most keyword hits, or [`Industry::General`] when nothing matches.
pub fn identify_industry(text: &str) -> Industry {
    let folded = text.to_lowercase();
    let mut best = Industry::General;
    let mut best_score = 0;

    for industry in Industry::SCORED {
        let score = count_occurrences(&folded, industry.keywords());
        if score > best_score {
            best = industry;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_senior_keyword_is_senior() {
        assert_eq!(determine_experience_level("Principal"), ExperienceLevel::Senior);
    }

    #[test]
    fn test_single_junior_keyword_is_entry() {
        assert_eq!(determine_experience_level("Intern"), ExperienceLevel::Entry);
    }

    #[test]
    fn test_mid_beats_junior() {
        assert_eq!(
            determine_experience_level("Specialist and consultant, former intern"),
            ExperienceLevel::Mid
        );
    }

    #[test]
    fn test_mid_junior_tie_is_entry() {
        assert_eq!(
            determine_experience_level("Consultant, former intern"),
            ExperienceLevel::Entry
        );
    }

    #[test]
    fn test_senior_junior_tie_is_not_senior() {
        // senior == junior > mid falls through to mid vs junior
        assert_eq!(
            determine_experience_level("Chief of interns"),
            ExperienceLevel::Entry
        );
    }

    #[test]
    fn test_no_hits_is_entry() {
        assert_eq!(determine_experience_level(""), ExperienceLevel::Entry);
    }

    #[test]
    fn test_industry_without_hits_is_general() {
        assert_eq!(identify_industry("Gardening and cooking"), Industry::General);
        assert_eq!(identify_industry(""), Industry::General);
    }

    #[test]
    fn test_industry_picks_maximum() {
        assert_eq!(
            identify_industry("Marketing, sales and finance for a software firm"),
            Industry::Business
        );
        assert_eq!(identify_industry("Laboratory science"), Industry::Research);
    }

    #[test]
    fn test_industry_tie_goes_to_earlier_category() {
        assert_eq!(identify_industry("software marketing"), Industry::Tech);
        assert_eq!(identify_industry("media science"), Industry::Creative);
    }

    #[test]
    fn test_labels_serialize_as_display_names() {
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::Mid).unwrap(),
            "\"Mid Level\""
        );
        assert_eq!(serde_json::to_string(&Industry::Tech).unwrap(), "\"Tech\"");
    }
}
