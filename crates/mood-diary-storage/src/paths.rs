//! Path resolution for diary files

use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "MOOD_DIARY_HOME";

/// Resolves standard paths for diary files
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve the data directory from `MOOD_DIARY_HOME`, falling back to `~/.mood-diary`
    pub fn new() -> Result<Self, StorageError> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self::with_data_dir(dir));
        }

        let home = dirs::home_dir().ok_or(StorageError::NoHomeDir)?;
        Ok(Self::with_data_dir(home.join(".mood-diary")))
    }

    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get journal.jsonl path
    pub fn journal_file(&self) -> PathBuf {
        self.data_dir.join("journal.jsonl")
    }

    /// Get mood_log.jsonl path
    pub fn mood_log_file(&self) -> PathBuf {
        self.data_dir.join("mood_log.jsonl")
    }

    /// Get settings.json path
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }
}
