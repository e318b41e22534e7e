//! Record logs: the persistence seam for journal entries and mood samples

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::io::{append_jsonl, read_jsonl, read_jsonl_contents, write_jsonl};

/// Durable, ordered sequence of records
pub trait RecordLog<T> {
    /// Every stored record, oldest first
    fn load_all(&self) -> Result<Vec<T>, StorageError>;

    /// Every stored record, or `StorageError::Unreadable` if any could not be
    /// decoded. Load this way before a `replace_all` so nothing is dropped.
    fn load_complete(&self) -> Result<Vec<T>, StorageError>;

    /// Append one record at the end
    fn append_one(&self, record: &T) -> Result<(), StorageError>;

    /// Replace the stored sequence with `records`
    fn replace_all(&self, records: &[T]) -> Result<(), StorageError>;

    /// Remove every record
    fn clear(&self) -> Result<(), StorageError>;
}

/// A [`RecordLog`] backed by a JSON-lines file
#[derive(Debug, Clone)]
pub struct JsonlLog<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonlLog<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> RecordLog<T> for JsonlLog<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load_all(&self) -> Result<Vec<T>, StorageError> {
        read_jsonl(&self.path).map_err(|e| StorageError::io(&self.path, e))
    }

    fn load_complete(&self) -> Result<Vec<T>, StorageError> {
        let contents =
            read_jsonl_contents(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        if !contents.is_complete() {
            return Err(StorageError::Unreadable {
                path: self.path.clone(),
                lines: contents.skipped,
            });
        }
        Ok(contents.records)
    }

    fn append_one(&self, record: &T) -> Result<(), StorageError> {
        append_jsonl(&self.path, record).map_err(|e| StorageError::io(&self.path, e))
    }

    fn replace_all(&self, records: &[T]) -> Result<(), StorageError> {
        write_jsonl(&self.path, records).map_err(|e| StorageError::io(&self.path, e))
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(&self.path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MoodRecord;
    use chrono::Utc;

    fn record(score: f64) -> MoodRecord {
        MoodRecord {
            date: Utc::now(),
            score,
            text: None,
        }
    }

    #[test]
    fn test_append_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let log: JsonlLog<MoodRecord> = JsonlLog::new(dir.path().join("mood_log.jsonl"));

        assert!(log.load_all().unwrap().is_empty());
        log.append_one(&record(1.0)).unwrap();
        log.append_one(&record(-1.0)).unwrap();

        let scores: Vec<f64> = log.load_all().unwrap().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![1.0, -1.0]);
    }

    #[test]
    fn test_replace_and_clear() {
        let dir = tempfile::TempDir::new().unwrap();
        let log: JsonlLog<MoodRecord> = JsonlLog::new(dir.path().join("mood_log.jsonl"));
        log.append_one(&record(1.0)).unwrap();

        log.replace_all(&[record(0.0)]).unwrap();
        assert_eq!(log.load_all().unwrap().len(), 1);

        log.clear().unwrap();
        assert!(!log.path().exists());
        // clearing twice is fine
        log.clear().unwrap();
        assert!(log.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_load_complete_refuses_unreadable_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let log: JsonlLog<MoodRecord> = JsonlLog::new(dir.path().join("mood_log.jsonl"));
        log.append_one(&record(1.0)).unwrap();
        assert_eq!(log.load_complete().unwrap().len(), 1);

        let mut raw = std::fs::read_to_string(log.path()).unwrap();
        raw.push_str("{\"date\":\"yesterday\",\"score\":0.0}\n");
        std::fs::write(log.path(), raw).unwrap();

        assert_eq!(log.load_all().unwrap().len(), 1);
        match log.load_complete() {
            Err(StorageError::Unreadable { lines, .. }) => assert_eq!(lines, vec![2]),
            other => panic!("expected unreadable error, got {other:?}"),
        }
    }
}
