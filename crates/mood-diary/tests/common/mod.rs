use mood_diary_storage::{JournalRecord, JsonlLog, MoodRecord, Paths};

pub struct TempDiary {
    pub dir: tempfile::TempDir,
    pub paths: Paths,
}

pub fn temp_diary() -> TempDiary {
    let dir = tempfile::TempDir::new().unwrap();
    let paths = Paths::with_data_dir(dir.path());
    TempDiary { dir, paths }
}

impl TempDiary {
    pub fn journal(&self) -> JsonlLog<JournalRecord> {
        JsonlLog::new(self.paths.journal_file())
    }

    pub fn moods(&self) -> JsonlLog<MoodRecord> {
        JsonlLog::new(self.paths.mood_log_file())
    }
}
