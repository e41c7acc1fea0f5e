// src/analysis/scorer.rs
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use super::features::FeatureSet;
use super::keywords::{self, count_occurrences};

/// Score of a text with no indicator hits and no adjustments.
pub const NEUTRAL_SCORE: i64 = 50;
pub const MAX_SCORE: u32 = 100;

/// The Big Five personality dimensions, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    #[serde(rename = "Emotional Stability")]
    EmotionalStability,
}

impl Trait {
    pub const ALL: [Trait; 5] = [
        Trait::Openness,
        Trait::Conscientiousness,
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::EmotionalStability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Trait::Openness => "Openness",
            Trait::Conscientiousness => "Conscientiousness",
            Trait::Extraversion => "Extraversion",
            Trait::Agreeableness => "Agreeableness",
            Trait::EmotionalStability => "Emotional Stability",
        }
    }

    fn index(self) -> usize {
        match self {
            Trait::Openness => 0,
            Trait::Conscientiousness => 1,
            Trait::Extraversion => 2,
            Trait::Agreeableness => 3,
            Trait::EmotionalStability => 4,
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamped 0-100 score for each trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitScores([u32; 5]);

impl TraitScores {
    /// Build from raw scores, clamping each into `0..=100`.
    pub fn from_raw(raw: [i64; 5]) -> Self {
        Self(raw.map(|score| score.clamp(0, i64::from(MAX_SCORE)) as u32))
    }

    pub fn get(&self, trait_: Trait) -> u32 {
        self.0[trait_.index()]
    }

    /// Scores in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, u32)> + '_ {
        Trait::ALL.iter().map(move |t| (*t, self.get(*t)))
    }

    /// Highest-scoring trait; the earliest trait in report order wins a tie.
    pub fn dominant(&self) -> (Trait, u32) {
        let mut best = (Trait::Openness, self.get(Trait::Openness));
        for (trait_, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (trait_, score);
            }
        }
        best
    }
}

impl Serialize for TraitScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Trait::ALL.len()))?;
        for (trait_, score) in self.iter() {
            map.serialize_entry(&trait_, &score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TraitScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = HashMap::<Trait, u32>::deserialize(deserializer)?;
        let mut scores = [0u32; 5];
        for trait_ in Trait::ALL {
            let score = *map
                .get(&trait_)
                .ok_or_else(|| D::Error::custom(format!("missing score for {}", trait_)))?;
            if score > MAX_SCORE {
                return Err(D::Error::custom(format!(
                    "score for {} out of range: {}",
                    trait_, score
                )));
            }
            scores[trait_.index()] = score;
        }
        Ok(Self(scores))
    }
}

/// Score every trait for `text`.
pub fn score_traits(text: &str, features: &FeatureSet) -> TraitScores {
    let folded = text.to_lowercase();
    TraitScores::from_raw(Trait::ALL.map(|t| raw_score_folded(t, &folded, features)))
}

/// Unclamped score of one trait: indicator balance around 50 plus feature bonuses.
pub fn raw_trait_score(trait_: Trait, text: &str, features: &FeatureSet) -> i64 {
    raw_score_folded(trait_, &text.to_lowercase(), features)
}

fn raw_score_folded(trait_: Trait, folded: &str, features: &FeatureSet) -> i64 {
    let indicators = keywords::for_trait(trait_);
    let high = i64::from(count_occurrences(folded, indicators.high));
    let low = i64::from(count_occurrences(folded, indicators.low));

    (high - low) + NEUTRAL_SCORE + adjustment(trait_, folded, features)
}

fn adjustment(trait_: Trait, folded: &str, features: &FeatureSet) -> i64 {
    let mut bonus = 0;
    match trait_ {
        Trait::Conscientiousness => {
            if features.avg_word_length > 5.0 {
                bonus += 5;
            }
            if features.achievement_mentions > 2 {
                bonus += 10;
            }
        }
        Trait::Extraversion => {
            if features.leadership_mentions > 1 {
                bonus += 10;
            }
            if features.exclamation_count > 0 {
                bonus += 5;
            }
        }
        Trait::Openness => {
            if features.vocabulary_diversity() > 0.6 {
                bonus += 10;
            }
        }
        Trait::Agreeableness => {
            bonus += 2 * i64::from(count_occurrences(folded, keywords::COLLABORATION));
        }
        Trait::EmotionalStability => {
            if features.sentence_count > 10 && features.exclamation_count == 0 {
                bonus += 5;
            }
        }
    }
    bonus
}
