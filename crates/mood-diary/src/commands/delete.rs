use crate::diary::Diary;

/// Delete by display index (0 = newest), as shown by `list`
pub fn run(diary: &Diary, index: usize) -> anyhow::Result<()> {
    let mut store = diary.load_entries_for_rewrite()?;

    match store.delete_at(index) {
        Some(removed) => {
            diary.save_entries(&store)?;
            println!(
                "🗑️ Deleted entry from {}",
                removed.created_at.format("%Y-%m-%d %H:%M")
            );
        }
        None => {
            println!("No entry at index {index}; nothing deleted.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary::test_support::temp_diary;
    use mood_diary_storage::Paths;
    use std::io::Write;

    fn seed(diary: &Diary, texts: &[&str]) {
        let mut store = diary.load_entries().unwrap();
        for text in texts {
            store.append(*text, 0.0, vec![]);
            diary.append_entry(store.all().last().unwrap()).unwrap();
        }
    }

    #[test]
    fn test_delete_newest() {
        let (_dir, diary) = temp_diary();
        seed(&diary, &["A", "B", "C"]);

        run(&diary, 0).unwrap();

        let store = diary.load_entries().unwrap();
        let texts: Vec<_> = store.all().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B"]);
    }

    #[test]
    fn test_out_of_range_leaves_file_alone() {
        let (_dir, diary) = temp_diary();
        seed(&diary, &["A", "B"]);

        assert!(run(&diary, 99).is_ok());
        assert_eq!(diary.load_entries().unwrap().len(), 2);
    }

    #[test]
    fn test_unreadable_line_blocks_delete() {
        let (dir, diary) = temp_diary();
        seed(&diary, &["A"]);

        let journal = Paths::with_data_dir(dir.path()).journal_file();
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(&journal)
            .unwrap();
        writeln!(
            file,
            r#"{{"timestamp":"2025-05-01T10:00:00Z","text":"B precious","score":0.2,"keywords":"never"}}"#
        )
        .unwrap();
        drop(file);
        seed(&diary, &["C"]);

        let before = std::fs::read_to_string(&journal).unwrap();
        let err = run(&diary, 0).unwrap_err();
        assert!(err.to_string().contains("unreadable"));

        let after = std::fs::read_to_string(&journal).unwrap();
        assert_eq!(before, after);
        assert!(after.contains("B precious"));
    }
}
