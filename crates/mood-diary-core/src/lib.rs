//! Mood classification and journal deduplication

mod classifier;
mod config;
mod error;
mod lexicon;
mod mood_log;
mod store;
mod types;

pub use classifier::{PolarityScorer, SentimentClassifier};
pub use config::{Config, ThresholdPolicy, OVERTHINKING_KEYWORDS};
pub use error::ParseMoodError;
pub use lexicon::LexiconScorer;
pub use mood_log::MoodLog;
pub use store::{content_hash, normalize, EntryStore};
pub use types::{Classification, JournalEntry, MoodLabel, MoodSample};
