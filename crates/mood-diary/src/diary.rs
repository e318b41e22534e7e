//! Wires the in-memory core types to the files in the data directory

use mood_diary_core::{Config, EntryStore, JournalEntry, MoodLog, MoodSample};
use mood_diary_storage::{JournalRecord, JsonlLog, MoodRecord, Paths, RecordLog, Settings};

pub struct Diary {
    paths: Paths,
    pub settings: Settings,
    journal: JsonlLog<JournalRecord>,
    moods: JsonlLog<MoodRecord>,
}

impl Diary {
    pub fn open(paths: Paths) -> anyhow::Result<Self> {
        let settings = Settings::load(&paths.settings_file())?;
        let journal = JsonlLog::new(paths.journal_file());
        let moods = JsonlLog::new(paths.mood_log_file());

        tracing::debug!(data_dir = %paths.data_dir().display(), "diary opened");
        Ok(Self {
            paths,
            settings,
            journal,
            moods,
        })
    }

    pub fn config(&self) -> Config {
        Config::new().with_extra_keywords(&self.settings.extra_keywords)
    }

    pub fn load_entries(&self) -> anyhow::Result<EntryStore> {
        let records = self.journal.load_all()?;
        Ok(EntryStore::from_entries(
            records.into_iter().map(JournalEntry::from),
        ))
    }

    /// Load for a later `save_entries`; fails rather than drop unreadable lines
    pub fn load_entries_for_rewrite(&self) -> anyhow::Result<EntryStore> {
        let records = self.journal.load_complete()?;
        Ok(EntryStore::from_entries(
            records.into_iter().map(JournalEntry::from),
        ))
    }

    pub fn append_entry(&self, entry: &JournalEntry) -> anyhow::Result<()> {
        self.journal.append_one(&JournalRecord::from(entry))?;
        Ok(())
    }

    /// Rewrite the journal file to match `store`
    pub fn save_entries(&self, store: &EntryStore) -> anyhow::Result<()> {
        let records: Vec<JournalRecord> = store.all().iter().map(JournalRecord::from).collect();
        self.journal.replace_all(&records)?;
        Ok(())
    }

    pub fn load_moods(&self) -> anyhow::Result<MoodLog> {
        let records = self.moods.load_all()?;
        Ok(MoodLog::from_samples(records.into_iter().map(MoodSample::from)))
    }

    pub fn append_mood(&self, sample: &MoodSample) -> anyhow::Result<()> {
        self.moods.append_one(&MoodRecord::from(sample))?;
        Ok(())
    }

    pub fn reset_moods(&self) -> anyhow::Result<()> {
        self.moods.clear()?;
        Ok(())
    }

    pub fn save_settings(&self) -> anyhow::Result<()> {
        self.settings.save(&self.paths.settings_file())?;
        Ok(())
    }
}
