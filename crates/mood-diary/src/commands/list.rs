use mood_diary_core::{EntryStore, ThresholdPolicy};
use mood_diary_feedback::mood_emoji;

use crate::diary::Diary;

pub fn run(diary: &Diary, limit: Option<usize>) -> anyhow::Result<()> {
    let store = diary.load_entries()?;
    let policy = diary.config().theme_policy;
    println!("{}", render_entries(&store, &policy, limit));
    Ok(())
}

fn render_entries(store: &EntryStore, policy: &ThresholdPolicy, limit: Option<usize>) -> String {
    if store.is_empty() {
        return "No saved journals yet.".to_string();
    }

    let shown = limit.unwrap_or(store.len());
    let mut lines = vec![format!(
        "📚 Your Saved Journals ({} of {})",
        shown.min(store.len()),
        store.len()
    )];

    for (i, entry) in store.newest_first().take(shown).enumerate() {
        let label = policy.label(entry.sentiment_score);
        lines.push(format!(
            "[{}] 📝 {} {}",
            i,
            entry.created_at.format("%Y-%m-%d %H:%M"),
            mood_emoji(label)
        ));
        lines.push(format!("    {}", entry.text));
        if !entry.keywords.is_empty() {
            lines.push(format!("    🧠 Keywords: {}", entry.keywords.join(", ")));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let out = render_entries(&EntryStore::new(), &ThresholdPolicy::THEME, None);
        assert!(out.contains("No saved journals"));
    }

    #[test]
    fn test_newest_first_with_display_indices() {
        let mut store = EntryStore::new();
        store.append("oldest", 0.0, vec![]);
        store.append("middle", 0.5, vec![]);
        store.append("newest", -0.5, vec!["never".to_string()]);

        let out = render_entries(&store, &ThresholdPolicy::THEME, None);
        let newest = out.find("newest").unwrap();
        let oldest = out.find("oldest").unwrap();
        assert!(newest < oldest);
        assert!(out.contains("[0] 📝"));
        assert!(out.contains("[2] 📝"));
        assert!(out.contains("🧠 Keywords: never"));
        assert!(out.contains("😞"));
    }

    #[test]
    fn test_limit() {
        let mut store = EntryStore::new();
        for t in ["a", "b", "c"] {
            store.append(t, 0.0, vec![]);
        }
        let out = render_entries(&store, &ThresholdPolicy::THEME, Some(1));
        assert!(out.contains("(1 of 3)"));
        assert!(!out.contains("[1]"));
    }
}
