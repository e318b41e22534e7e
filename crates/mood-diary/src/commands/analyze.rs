use mood_diary_core::{Classification, SentimentClassifier};
use mood_diary_feedback::{mood_emoji, MoodTheme};

use crate::diary::Diary;

/// Live preview: classify without saving
pub fn run(diary: &Diary, text: &str, json: bool) -> anyhow::Result<()> {
    let classifier = SentimentClassifier::new(&diary.config());
    let classification = classifier.classify(text);

    if json {
        println!("{}", to_json(&classification));
    } else {
        println!("{}", render_preview(&classification));
    }
    Ok(())
}

fn to_json(c: &Classification) -> serde_json::Value {
    serde_json::json!({
        "score": (c.score * 100.0).round() / 100.0,
        "label": c.label,
        "keywords": c.keywords,
        "theme": MoodTheme::for_label(c.label),
    })
}

fn render_preview(c: &Classification) -> String {
    let theme = MoodTheme::for_label(c.label);
    let mut out = format!(
        "{} {} ({:+.2})  theme {} / {}",
        mood_emoji(c.label),
        c.label,
        c.score,
        theme.background,
        theme.text
    );
    if !c.keywords.is_empty() {
        out.push_str(&format!("\nkeywords: {}", c.keywords.join(", ")));
    }
    out
}
