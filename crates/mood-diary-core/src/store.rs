//! In-memory journal with content-hash deduplication

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use xxhash_rust::xxh64::xxh64;

use crate::types::{Classification, JournalEntry};

/// Trim and lowercase, the form used for duplicate detection
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Non-cryptographic fingerprint of the normalized text
pub fn content_hash(text: &str) -> u64 {
    xxh64(normalize(text).as_bytes(), 0)
}

/// Ordered journal entries, oldest first, at most one per content hash
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<JournalEntry>,
    hashes: HashSet<u64>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously saved entries, dropping duplicates
    pub fn from_entries<I: IntoIterator<Item = JournalEntry>>(entries: I) -> Self {
        let mut store = Self::new();
        for entry in entries {
            store.append_entry(entry);
        }
        store
    }

    /// Append a new entry stamped with the current time
    ///
    /// Returns `false` without touching the store when the normalized text
    /// is already present.
    pub fn append(&mut self, text: impl Into<String>, score: f64, keywords: Vec<String>) -> bool {
        self.append_at(text, score, keywords, Utc::now())
    }

    pub fn append_classified(&mut self, text: impl Into<String>, c: &Classification) -> bool {
        self.append(text, c.score, c.keywords.clone())
    }

    /// Same as [`append`](Self::append) with an explicit timestamp
    pub fn append_at(
        &mut self,
        text: impl Into<String>,
        score: f64,
        keywords: Vec<String>,
        at: DateTime<Utc>,
    ) -> bool {
        let text = text.into();
        let content_hash = content_hash(&text);
        self.append_entry(JournalEntry {
            text,
            sentiment_score: score,
            keywords,
            created_at: at,
            content_hash,
        })
    }

    /// Append a fully built entry; the hash is recomputed from its text
    pub fn append_entry(&mut self, mut entry: JournalEntry) -> bool {
        entry.content_hash = content_hash(&entry.text);
        if self.hashes.contains(&entry.content_hash) {
            tracing::debug!(hash = entry.content_hash, "duplicate entry ignored");
            return false;
        }

        // created_at never goes backwards
        if let Some(last) = self.entries.last() {
            if entry.created_at < last.created_at {
                entry.created_at = last.created_at;
            }
        }

        self.hashes.insert(entry.content_hash);
        self.entries.push(entry);
        true
    }

    /// Remove by position in the newest-first view
    ///
    /// Out-of-range indices leave the store untouched and yield `None`.
    pub fn delete_at(&mut self, display_index: usize) -> Option<JournalEntry> {
        let storage_index = self.storage_index(display_index)?;
        let removed = self.entries.remove(storage_index);
        self.hashes.remove(&removed.content_hash);
        tracing::debug!(display_index, storage_index, "entry deleted");
        Some(removed)
    }

    /// Entry at `display_index` in the newest-first view
    pub fn get_display(&self, display_index: usize) -> Option<&JournalEntry> {
        self.storage_index(display_index)
            .and_then(|i| self.entries.get(i))
    }

    fn storage_index(&self, display_index: usize) -> Option<usize> {
        if display_index >= self.entries.len() {
            return None;
        }
        Some(self.entries.len() - 1 - display_index)
    }

    /// All entries in insertion order (oldest first)
    pub fn all(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter().rev()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.hashes.contains(&content_hash(text))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn texts(store: &EntryStore) -> Vec<&str> {
        store.all().iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_identical_append_collapses() {
        let mut store = EntryStore::new();
        assert!(store.append("Hello world", 0.0, vec![]));
        assert!(!store.append("Hello world", 0.0, vec![]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_normalized_duplicate_collapses() {
        let mut store = EntryStore::new();
        assert!(store.append("Hello world", 0.0, vec![]));
        assert!(!store.append("hello world ", 0.5, vec!["x".into()]));
        assert_eq!(store.len(), 1);
        // first writer kept
        assert_eq!(store.all()[0].text, "Hello world");
        assert_eq!(store.all()[0].sentiment_score, 0.0);
    }

    #[test]
    fn test_distinct_entries_in_insertion_order() {
        let mut store = EntryStore::new();
        store.append("A", 0.0, vec![]);
        store.append("B", 0.0, vec![]);
        assert_eq!(texts(&store), vec!["A", "B"]);
    }

    #[test]
    fn test_delete_translates_display_index() {
        let mut store = EntryStore::new();
        for t in ["A", "B", "C"] {
            store.append(t, 0.0, vec![]);
        }

        let removed = store.delete_at(0).unwrap();
        assert_eq!(removed.text, "C");
        assert_eq!(texts(&store), vec!["A", "B"]);

        store.delete_at(1);
        assert_eq!(texts(&store), vec!["B"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut store = EntryStore::new();
        store.append("A", 0.0, vec![]);
        store.append("B", 0.0, vec![]);

        assert!(store.delete_at(99).is_none());
        assert!(store.delete_at(2).is_none());
        assert_eq!(texts(&store), vec!["A", "B"]);

        assert!(EntryStore::new().delete_at(0).is_none());
    }

    #[test]
    fn test_deleted_text_can_be_appended_again() {
        let mut store = EntryStore::new();
        store.append("A", 0.0, vec![]);
        store.delete_at(0);
        assert!(!store.contains("a"));
        assert!(store.append("a", 0.0, vec![]));
    }

    #[test]
    fn test_created_at_monotonic() {
        let mut store = EntryStore::new();
        let now = Utc::now();
        store.append_at("later", 0.0, vec![], now);
        store.append_at("earlier clock", 0.0, vec![], now - Duration::minutes(5));

        let all = store.all();
        assert!(all[1].created_at >= all[0].created_at);
    }

    #[test]
    fn test_from_entries_dedups_and_keeps_order() {
        let mut source = EntryStore::new();
        source.append("one", 0.1, vec![]);
        source.append("two", 0.2, vec![]);
        let mut saved = source.all().to_vec();
        saved.push(saved[0].clone());

        let restored = EntryStore::from_entries(saved);
        assert_eq!(texts(&restored), vec!["one", "two"]);
    }

    #[test]
    fn test_newest_first_and_get_display() {
        let mut store = EntryStore::new();
        for t in ["A", "B", "C"] {
            store.append(t, 0.0, vec![]);
        }
        let view: Vec<_> = store.newest_first().map(|e| e.text.as_str()).collect();
        assert_eq!(view, vec!["C", "B", "A"]);
        assert_eq!(store.get_display(2).unwrap().text, "A");
        assert!(store.get_display(3).is_none());
    }

    #[test]
    fn test_content_hash_normalizes() {
        assert_eq!(content_hash("  Hi There "), content_hash("hi there"));
        assert_ne!(content_hash("hi there"), content_hash("hi  there"));
    }
}
