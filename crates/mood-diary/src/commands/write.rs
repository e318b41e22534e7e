use mood_diary_core::{Classification, SentimentClassifier};
use mood_diary_feedback::{Insight, MoodTheme, Picker, PlaylistCursor};

use crate::diary::Diary;

pub const EMPTY_ENTRY_WARNING: &str = "Please enter something before analyzing.";

pub fn run(diary: &Diary, text: &str) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        println!("{EMPTY_ENTRY_WARNING}");
        return Ok(());
    }

    let config = diary.config();
    let classifier = SentimentClassifier::new(&config);
    let classification = classifier.classify(text);

    let mut store = diary.load_entries()?;
    let saved = store.append_classified(text, &classification);
    if saved {
        if let Some(entry) = store.all().last() {
            diary.append_entry(entry)?;
        }
    }
    tracing::info!(saved, score = classification.score, "entry analyzed");

    let mut picker = Picker::new();
    let insight = Insight::derive(&classification, &mut picker);
    let cursor = PlaylistCursor::new(diary.settings.playlist_index);
    let playlist = cursor.current(config.playlist_policy.label(classification.score));

    println!(
        "{}",
        render_analysis(&classification, saved, &insight, playlist)
    );
    Ok(())
}

fn render_analysis(
    c: &Classification,
    saved: bool,
    insight: &Insight,
    playlist: Option<&str>,
) -> String {
    let theme = MoodTheme::for_label(c.label);
    let mut sections = Vec::new();

    sections.push(format!(
        "🔍 Analysis Result\n==================\nScore: {:+.2} ({})\nTheme: background {} / text {}",
        c.score, c.label, theme.background, theme.text
    ));

    sections.push(insight.render());

    sections.push(if saved {
        "📚 Saved to your journal.".to_string()
    } else {
        "📚 Already in your journal, nothing new saved.".to_string()
    });

    if let Some(link) = playlist {
        sections.push(format!("🎶 A playlist for this mood: {link}"));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary::test_support::temp_diary;

    #[test]
    fn test_write_saves_once() {
        let (_dir, diary) = temp_diary();
        run(&diary, "I always mess things up and feel hopeless").unwrap();
        run(&diary, "i always mess things up and feel hopeless  ").unwrap();

        let store = diary.load_entries().unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.all()[0].sentiment_score < -0.3);
    }

    #[test]
    fn test_empty_text_saves_nothing() {
        let (_dir, diary) = temp_diary();
        run(&diary, "   ").unwrap();
        assert!(diary.load_entries().unwrap().is_empty());
    }

    #[test]
    fn test_render_analysis_sections() {
        let c = Classification {
            score: 0.8,
            label: mood_diary_core::MoodLabel::Positive,
            keywords: vec![],
        };
        let out = render_analysis(&c, false, &Insight::GoodSpace, Some("https://x"));
        assert!(out.contains("Score: +0.80 (positive)"));
        assert!(out.contains("#fff9c4"));
        assert!(out.contains("good space"));
        assert!(out.contains("Already in your journal"));
        assert!(out.contains("https://x"));
    }
}
