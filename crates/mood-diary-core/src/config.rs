//! Configuration for mood classification

use serde::{Deserialize, Serialize};

use crate::types::MoodLabel;

/// Phrases that suggest an overthinking spiral, matched as lowercase substrings
pub const OVERTHINKING_KEYWORDS: &[&str] = &[
    "always",
    "never",
    "can't",
    "not",
    "should have",
    "why",
    "again",
    "mess",
    "ruined",
    "everything",
    "nothing",
    "failed",
    "hate",
    "hopeless",
    "worthless",
    "sad",
    "what if",
    "maybe i should have",
    "i can't stop thinking about",
    "why did i",
    "what will they think",
    "i always mess things up",
    "what if it goes wrong?",
    "did i say something wrong?",
    "i need to be sure",
    "past",
    "future",
    "every time",
    "doubt",
    "anxious",
    "nervous",
    "insecure",
    "guilt",
    "fear",
    "regret",
    "embarrassed",
    "shame",
    "panic",
    "die",
    "depressed",
    "depression",
    "low",
    "without",
    "alone",
    "weak",
    "confusion",
    "confuse",
    "remember",
    "i wonder",
    "left",
    "defeat",
    "destroy",
    "disappointed",
    "disappointment",
    "end",
    "loser",
];

/// Score thresholds mapping a polarity to a mood label
///
/// Both bounds are strict: a score equal to either bound is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    /// score > this => positive
    pub positive_above: f64,
    /// score < this => negative
    pub negative_below: f64,
}

impl ThresholdPolicy {
    /// Live theme colouring and entry mood labels
    pub const THEME: Self = Self {
        positive_above: 0.3,
        negative_below: -0.3,
    };

    /// Mood-category suggestions. Deliberately asymmetric, matching the
    /// behaviour users already see; do not fold into `THEME`.
    pub const CATEGORY: Self = Self {
        positive_above: 0.4,
        negative_below: -0.3,
    };

    /// Playlist mood selection
    pub const PLAYLIST: Self = Self {
        positive_above: 0.1,
        negative_below: -0.1,
    };

    pub fn label(&self, score: f64) -> MoodLabel {
        if score > self.positive_above {
            MoodLabel::Positive
        } else if score < self.negative_below {
            MoodLabel::Negative
        } else {
            MoodLabel::Neutral
        }
    }
}

/// Classifier configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Policy for `Classification::label`
    pub theme_policy: ThresholdPolicy,

    /// Policy for suggestion categories
    pub category_policy: ThresholdPolicy,

    /// Policy for playlist selection
    pub playlist_policy: ThresholdPolicy,

    /// Overthinking keywords (lowercase)
    pub keywords: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            theme_policy: ThresholdPolicy::THEME,
            category_policy: ThresholdPolicy::CATEGORY,
            playlist_policy: ThresholdPolicy::PLAYLIST,
            keywords: OVERTHINKING_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Extend the keyword table; entries are trimmed, lowercased and deduplicated
    pub fn with_extra_keywords<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in extra {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() || self.keywords.contains(&keyword) {
                continue;
            }
            self.keywords.push(keyword);
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
