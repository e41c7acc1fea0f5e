// src/types/record.rs
//! History entries persisted after each completed analysis.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{ExperienceLevel, Industry, PersonalityAnalysis, Trait, TraitScores};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    pub experience_level: ExperienceLevel,
    pub industry: Industry,
    pub dominant_trait: String,
    pub personality_scores: TraitScores,
    pub full_report: String,
}

impl AnalysisRecord {
    /// Record for `analysis`, stamped with the current local time.
    pub fn from_analysis(analysis: &PersonalityAnalysis) -> Self {
        Self::with_timestamp(analysis, Local::now().naive_local())
    }

    pub fn with_timestamp(analysis: &PersonalityAnalysis, timestamp: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            // whole seconds only, matching the stored format
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            experience_level: analysis.experience_level,
            industry: analysis.industry,
            dominant_trait: analysis.dominant_trait_label(),
            personality_scores: analysis.scores,
            full_report: analysis.report.clone(),
        }
    }

    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    pub fn timestamp_display(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Flat row used for CSV export.
#[derive(Debug, Serialize)]
pub struct HistoryRow<'a> {
    pub id: String,
    pub timestamp: String,
    pub experience_level: &'a str,
    pub industry: &'a str,
    pub dominant_trait: &'a str,
    pub openness: u32,
    pub conscientiousness: u32,
    pub extraversion: u32,
    pub agreeableness: u32,
    pub emotional_stability: u32,
}

impl<'a> From<&'a AnalysisRecord> for HistoryRow<'a> {
    fn from(record: &'a AnalysisRecord) -> Self {
        let scores = &record.personality_scores;
        Self {
            id: record.id.to_string(),
            timestamp: record.timestamp_display(),
            experience_level: record.experience_level.as_str(),
            industry: record.industry.as_str(),
            dominant_trait: &record.dominant_trait,
            openness: scores.get(Trait::Openness),
            conscientiousness: scores.get(Trait::Conscientiousness),
            extraversion: scores.get(Trait::Extraversion),
            agreeableness: scores.get(Trait::Agreeableness),
            emotional_stability: scores.get(Trait::EmotionalStability),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(14, 5, 7, 250)
            .unwrap()
    }

    #[test]
    fn test_record_copies_analysis() {
        let analysis = analyze("Senior software developer.");
        let record = AnalysisRecord::with_timestamp(&analysis, fixed_time());

        assert_eq!(record.experience_level, analysis.experience_level);
        assert_eq!(record.industry, analysis.industry);
        assert_eq!(record.personality_scores, analysis.scores);
        assert_eq!(record.full_report, analysis.report);
        assert_eq!(record.dominant_trait, analysis.dominant_trait_label());
        assert_eq!(record.timestamp_display(), "2024-03-09 14:05:07");
        assert_eq!(record.short_id().len(), 8);
    }

    #[test]
    fn test_record_json_layout() {
        let record = AnalysisRecord::with_timestamp(&analyze(""), fixed_time());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["timestamp"], "2024-03-09 14:05:07");
        assert_eq!(value["experience_level"], "Entry Level");
        assert_eq!(value["industry"], "General");
        assert_eq!(value["dominant_trait"], "Openness (50.0)");
        assert_eq!(value["personality_scores"]["Emotional Stability"], 50);

        let back: AnalysisRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_history_row_flattens_scores() {
        let record = AnalysisRecord::with_timestamp(&analyze(""), fixed_time());
        let row = HistoryRow::from(&record);
        assert_eq!(row.industry, "General");
        assert_eq!(row.openness, 50);
        assert_eq!(row.emotional_stability, 50);
    }
}
