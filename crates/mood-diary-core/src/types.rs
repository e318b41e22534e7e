//! Core types for mood classification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoodError;

/// Mood label derived from a polarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Positive,
    Neutral,
    Negative,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 3] = [MoodLabel::Positive, MoodLabel::Neutral, MoodLabel::Negative];

    /// Score logged for a manually selected mood (1 / 0 / -1)
    pub fn canonical_score(self) -> f64 {
        match self {
            MoodLabel::Positive => 1.0,
            MoodLabel::Neutral => 0.0,
            MoodLabel::Negative => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoodLabel::Positive => "positive",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodLabel {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "pos" | "+" => Ok(MoodLabel::Positive),
            "neutral" | "neu" | "0" => Ok(MoodLabel::Neutral),
            "negative" | "neg" | "-" => Ok(MoodLabel::Negative),
            _ => Err(ParseMoodError(s.to_string())),
        }
    }
}

/// Result of classifying one piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Polarity in [-1, 1]
    pub score: f64,
    /// Label under the theme policy
    pub label: MoodLabel,
    /// Matched overthinking keywords, in keyword-table order, no duplicates
    pub keywords: Vec<String>,
}

impl Classification {
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            label: MoodLabel::Neutral,
            keywords: Vec::new(),
        }
    }
}

/// A stored journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub text: String,
    pub sentiment_score: f64,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Fingerprint of the normalized text, dedup only
    pub content_hash: u64,
}

/// One point of the mood trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSample {
    pub date: DateTime<Utc>,
    pub sentiment_score: f64,
    #[serde(default)]
    pub text: Option<String>,
}

impl MoodSample {
    pub fn new(date: DateTime<Utc>, sentiment_score: f64) -> Self {
        Self {
            date,
            sentiment_score,
            text: None,
        }
    }

    pub fn from_label(date: DateTime<Utc>, label: MoodLabel, text: Option<String>) -> Self {
        Self {
            date,
            sentiment_score: label.canonical_score(),
            text,
        }
    }
}
