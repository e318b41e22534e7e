//! JSONL I/O and atomic file operations

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Append a JSON record to a JSONL file
pub fn append_jsonl<T: Serialize>(path: &Path, record: &T) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let json = serde_json::to_string(record)?;
    writeln!(file, "{}", json)?;
    Ok(())
}

/// Records parsed from a JSONL file and the 1-based lines that failed to parse
#[derive(Debug)]
pub struct JsonlContents<T> {
    pub records: Vec<T>,
    pub skipped: Vec<usize>,
}

impl<T> JsonlContents<T> {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Read all records from a JSONL file, skipping lines that do not parse
pub fn read_jsonl<T: for<'de> Deserialize<'de>>(path: &Path) -> std::io::Result<Vec<T>> {
    Ok(read_jsonl_contents(path)?.records)
}

/// Like [`read_jsonl`], but also reports which lines were skipped
pub fn read_jsonl_contents<T: for<'de> Deserialize<'de>>(
    path: &Path,
) -> std::io::Result<JsonlContents<T>> {
    let mut contents = JsonlContents {
        records: Vec::new(),
        skipped: Vec::new(),
    };
    if !path.exists() {
        return Ok(contents);
    }

    let reader = BufReader::new(File::open(path)?);
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(record) => contents.records.push(record),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    line = line_no + 1,
                    %err,
                    "skipping malformed record"
                );
                contents.skipped.push(line_no + 1);
            }
        }
    }

    Ok(contents)
}

/// Rewrite a JSONL file with exactly `records`, atomically
pub fn write_jsonl<T: Serialize>(path: &Path, records: &[T]) -> std::io::Result<()> {
    let mut buf = String::new();
    for record in records {
        buf.push_str(&serde_json::to_string(record)?);
        buf.push('\n');
    }
    atomic_write(path, buf.as_bytes())
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}
