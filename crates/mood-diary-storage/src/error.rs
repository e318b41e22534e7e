//! Storage errors

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("home directory not found; set MOOD_DIARY_HOME or pass --data-dir")]
    NoHomeDir,

    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "{} has unreadable records on lines {:?}; fix or remove them before rewriting",
        .path.display(),
        .lines
    )]
    Unreadable { path: PathBuf, lines: Vec<usize> },

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
