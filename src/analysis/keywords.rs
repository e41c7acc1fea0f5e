// src/analysis/keywords.rs
//! Keyword dictionaries used by the feature extractor, trait scorer and classifiers.
//!
//! All lists are matched by substring against the lower-cased resume text.

use super::Trait;

/// High and low indicator vocabularies for one trait.
#[derive(Debug, Clone, Copy)]
pub struct TraitKeywords {
    pub high: &'static [&'static str],
    pub low: &'static [&'static str],
}

pub const OPENNESS: TraitKeywords = TraitKeywords {
    high: &[
        "creative",
        "innovative",
        "artistic",
        "imaginative",
        "curious",
        "original",
        "inventive",
        "versatile",
        "adaptable",
        "experimental",
        "design",
        "research",
        "development",
        "exploration",
        "brainstorming",
        "conceptual",
        "theoretical",
        "abstract",
        "philosophical",
        "unconventional",
        "novel",
        "cutting-edge",
    ],
    low: &[
        "traditional",
        "conventional",
        "routine",
        "standard",
        "established",
        "systematic",
        "structured",
        "methodical",
        "practical",
        "conservative",
    ],
};

pub const CONSCIENTIOUSNESS: TraitKeywords = TraitKeywords {
    high: &[
        "organized",
        "detailed",
        "responsible",
        "reliable",
        "thorough",
        "systematic",
        "methodical",
        "disciplined",
        "efficient",
        "punctual",
        "planning",
        "scheduled",
        "achievement",
        "goal-oriented",
        "dedicated",
        "committed",
        "focused",
        "precise",
        "quality",
        "standards",
        "deadline",
        "completion",
        "accomplishment",
    ],
    low: &[
        "flexible",
        "spontaneous",
        "casual",
        "relaxed",
        "informal",
        "adaptable",
    ],
};

pub const EXTRAVERSION: TraitKeywords = TraitKeywords {
    high: &[
        "leadership",
        "team",
        "collaboration",
        "communication",
        "presentation",
        "networking",
        "social",
        "outgoing",
        "energetic",
        "enthusiastic",
        "dynamic",
        "engaging",
        "interactive",
        "public speaking",
        "relationship building",
        "influencing",
        "motivating",
        "coordinating",
        "facilitating",
        "mentoring",
    ],
    low: &[
        "independent",
        "individual",
        "solitary",
        "analytical",
        "research",
        "documentation",
        "writing",
        "technical",
        "focused",
        "concentrated",
    ],
};

pub const AGREEABLENESS: TraitKeywords = TraitKeywords {
    high: &[
        "cooperative",
        "collaborative",
        "supportive",
        "helpful",
        "team player",
        "consensus",
        "harmony",
        "diplomatic",
        "understanding",
        "empathetic",
        "service",
        "assistance",
        "volunteer",
        "community",
        "charity",
        "caring",
        "nurturing",
        "patient",
        "kind",
        "considerate",
        "respectful",
    ],
    low: &[
        "competitive",
        "challenging",
        "assertive",
        "direct",
        "critical",
        "analytical",
        "objective",
        "independent",
        "decisive",
    ],
};

pub const EMOTIONAL_STABILITY: TraitKeywords = TraitKeywords {
    high: &[
        "calm",
        "stable",
        "consistent",
        "resilient",
        "composed",
        "confident",
        "steady",
        "balanced",
        "reliable",
        "stress management",
        "pressure",
        "challenging",
        "difficult",
        "crisis",
        "problem-solving",
        "adaptable",
        "flexible",
        "managing",
        "handling",
        "coping",
    ],
    low: &[
        "sensitive",
        "reactive",
        "emotional",
        "stressed",
        "anxious",
        "worried",
    ],
};

/// Agreeableness bonus vocabulary, worth two points per hit.
pub const COLLABORATION: &[&str] = &["team", "collaborate", "help", "support", "assist"];

pub const EDUCATION: &[&str] = &[
    "university",
    "college",
    "degree",
    "bachelor",
    "master",
    "phd",
    "doctorate",
];

pub const ACHIEVEMENT: &[&str] = &[
    "achieved",
    "accomplished",
    "awarded",
    "recognized",
    "improved",
    "increased",
];

pub const LEADERSHIP: &[&str] = &[
    "led",
    "managed",
    "directed",
    "supervised",
    "coordinated",
    "headed",
];

pub const SENIOR: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "director",
    "manager",
    "head",
    "chief",
    "vp",
    "vice president",
];

pub const MID: &[&str] = &["specialist", "analyst", "consultant", "coordinator", "supervisor"];

pub const JUNIOR: &[&str] = &["junior", "entry", "assistant", "associate", "intern", "trainee"];

// "IT" is uppercase and therefore never matches the lower-cased text.
pub const TECH: &[&str] = &[
    "software",
    "technology",
    "IT",
    "computer",
    "programming",
    "development",
    "data",
];

pub const BUSINESS: &[&str] = &[
    "business",
    "management",
    "marketing",
    "sales",
    "finance",
    "accounting",
];

pub const CREATIVE: &[&str] = &["design", "creative", "art", "media", "advertising", "content"];

pub const RESEARCH: &[&str] = &["research", "science", "analysis", "academic", "laboratory"];

/// Indicator lists for a trait.
pub fn for_trait(trait_: Trait) -> &'static TraitKeywords {
    match trait_ {
        Trait::Openness => &OPENNESS,
        Trait::Conscientiousness => &CONSCIENTIOUSNESS,
        Trait::Extraversion => &EXTRAVERSION,
        Trait::Agreeableness => &AGREEABLENESS,
        Trait::EmotionalStability => &EMOTIONAL_STABILITY,
    }
}

/// Sum of non-overlapping substring occurrences of every keyword in `haystack`.
pub fn count_occurrences(haystack: &str, keywords: &[&str]) -> u32 {
    keywords
        .iter()
        .map(|kw| haystack.matches(kw).count() as u32)
        .sum()
}
