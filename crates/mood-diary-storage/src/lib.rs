//! Persistence for journal entries, mood samples and settings

mod error;
mod io;
mod log;
mod paths;
mod settings;
mod types;

pub use error::StorageError;
pub use io::{
    append_jsonl, atomic_write, read_jsonl, read_jsonl_contents, write_jsonl, JsonlContents,
};
pub use log::{JsonlLog, RecordLog};
pub use paths::{Paths, DATA_DIR_ENV};
pub use settings::Settings;
pub use types::{JournalRecord, MoodRecord};
