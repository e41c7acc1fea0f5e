// src/analysis/features.rs
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

use super::keywords::{self, count_occurrences};

// Letters, numbers and underscore only. `\w` would also take combining marks
// and connector punctuation, splitting decomposed text differently.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"));
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("digits pattern is valid"));

/// Surface statistics of one resume text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub total_words: u32,
    pub unique_words: u32,
    pub avg_word_length: f64,
    pub sentence_count: u32,
    pub exclamation_count: u32,
    pub question_count: u32,
    pub capital_words: u32,
    pub numbers_count: u32,
    pub education_mentions: u32,
    pub achievement_mentions: u32,
    pub leadership_mentions: u32,
}

impl FeatureSet {
    /// Unique-to-total word ratio, 0 for text without words.
    pub fn vocabulary_diversity(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        f64::from(self.unique_words) / f64::from(self.total_words)
    }
}

/// Word tokens: maximal runs of letters, numbers and underscores.
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Whole token of two or more ASCII capitals.
fn is_capital_word(token: &str) -> bool {
    token.len() >= 2 && token.bytes().all(|b| b.is_ascii_uppercase())
}

/// Compute the [`FeatureSet`] for `text`.
///
/// Token statistics and keyword tallies use the lower-cased text; punctuation,
/// capitalised words and numbers are read from the original.
pub fn extract_features(text: &str) -> FeatureSet {
    let folded = text.to_lowercase();
    let words: Vec<&str> = tokens(&folded).collect();

    let total_words = words.len() as u32;
    let unique_words = words.iter().collect::<HashSet<_>>().len() as u32;
    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        total_chars as f64 / words.len() as f64
    };

    FeatureSet {
        total_words,
        unique_words,
        avg_word_length,
        sentence_count: SENTENCE_END.find_iter(text).count() as u32,
        exclamation_count: text.matches('!').count() as u32,
        question_count: text.matches('?').count() as u32,
        capital_words: tokens(text).filter(|t| is_capital_word(t)).count() as u32,
        numbers_count: tokens(text).filter(|t| DIGITS.is_match(t)).count() as u32,
        education_mentions: count_occurrences(&folded, keywords::EDUCATION),
        achievement_mentions: count_occurrences(&folded, keywords::ACHIEVEMENT),
        leadership_mentions: count_occurrences(&folded, keywords::LEADERSHIP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_zeroed_features() {
        let features = extract_features("");
        assert_eq!(features, FeatureSet::default());
        assert_eq!(features.avg_word_length, 0.0);
        assert_eq!(features.vocabulary_diversity(), 0.0);
    }

    #[test]
    fn test_word_statistics_are_case_folded() {
        let features = extract_features("Rust rust RUST code");
        assert_eq!(features.total_words, 4);
        assert_eq!(features.unique_words, 2);
        assert_eq!(features.avg_word_length, 4.0);
    }

    #[test]
    fn test_sentence_runs_and_punctuation() {
        let features = extract_features("Done... Really?! Yes. Great!");
        assert_eq!(features.sentence_count, 4);
        assert_eq!(features.exclamation_count, 2);
        assert_eq!(features.question_count, 1);
    }

    #[test]
    fn test_capitals_and_numbers_use_original_text() {
        let features = extract_features("Built AWS and GCP tooling for 12 teams in 2021. A I");
        assert_eq!(features.capital_words, 2);
        assert_eq!(features.numbers_count, 2);
    }

    #[test]
    fn test_keyword_tallies_count_substrings() {
        let features = extract_features(
            "Master of Science, University of Oslo. Achieved and improved uptime. Led and managed teams.",
        );
        assert_eq!(features.education_mentions, 2);
        assert_eq!(features.achievement_mentions, 2);
        assert_eq!(features.leadership_mentions, 2);
    }

    #[test]
    fn test_combining_mark_ends_a_word() {
        // "cafe" + U+0301: the accent is not part of the token
        let features = extract_features("cafe\u{301}");
        assert_eq!(features.total_words, 1);
        assert_eq!(features.avg_word_length, 4.0);
    }

    #[test]
    fn test_non_ascii_words_and_underscores() {
        let features = extract_features("Résumé naïve_user résumé");
        assert_eq!(features.total_words, 3);
        assert_eq!(features.unique_words, 2);
    }

    #[test]
    fn test_capitals_and_numbers_with_non_ascii_neighbours() {
        // accented capitals are not ASCII capitals; Arabic-Indic digits are digits
        let features = extract_features("AWS\u{301} ÉTÉ SQL_DB \u{663}\u{664} 7a");
        assert_eq!(features.capital_words, 1);
        assert_eq!(features.numbers_count, 1);
    }

    #[test]
    fn test_vocabulary_diversity() {
        let features = extract_features("one two two two");
        assert_eq!(features.vocabulary_diversity(), 0.5);
    }
}
