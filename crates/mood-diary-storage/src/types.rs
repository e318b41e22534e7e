//! Persisted record types

use chrono::{DateTime, Utc};
use mood_diary_core::{content_hash, JournalEntry, MoodSample};
use serde::{Deserialize, Serialize};

/// One journal entry as written to journal.jsonl
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub timestamp: DateTime<Utc>,
    pub text: String,
    pub score: f64,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl From<&JournalEntry> for JournalRecord {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            timestamp: entry.created_at,
            text: entry.text.clone(),
            score: entry.sentiment_score,
            keywords: entry.keywords.clone(),
        }
    }
}

impl From<JournalRecord> for JournalEntry {
    fn from(record: JournalRecord) -> Self {
        let content_hash = content_hash(&record.text);
        Self {
            text: record.text,
            sentiment_score: record.score,
            keywords: record.keywords,
            created_at: record.timestamp,
            content_hash,
        }
    }
}

/// One mood sample as written to mood_log.jsonl
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub date: DateTime<Utc>,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl From<&MoodSample> for MoodRecord {
    fn from(sample: &MoodSample) -> Self {
        Self {
            date: sample.date,
            score: sample.sentiment_score,
            text: sample.text.clone(),
        }
    }
}

impl From<MoodRecord> for MoodSample {
    fn from(record: MoodRecord) -> Self {
        Self {
            date: record.date,
            sentiment_score: record.score,
            text: record.text,
        }
    }
}
