use chrono::Utc;
use mood_diary_core::{MoodLabel, MoodSample};
use mood_diary_feedback::Picker;

use crate::diary::Diary;

const MANUAL_SELECTION: &str = "(manual selection)";

pub fn run(diary: &Diary, label: MoodLabel, log: bool) -> anyhow::Result<()> {
    let mut picker = Picker::new();
    let quote = picker.quote(label);
    let suggestions = picker.suggestions(label);
    println!("{}", render_pick(quote, &suggestions));

    if log {
        let now = Utc::now();
        let sample = MoodSample::from_label(now, label, Some(MANUAL_SELECTION.to_string()));
        diary.append_mood(&sample)?;
        println!("\nLogged: {label} mood at {}", now.format("%H:%M:%S"));
    }
    Ok(())
}

pub fn run_suggest(diary: &Diary, score: f64) -> anyhow::Result<()> {
    if !(-1.0..=1.0).contains(&score) {
        anyhow::bail!("score must be between -1 and 1, got {score}");
    }

    let mut picker = Picker::new();
    let policy = diary.config().category_policy;
    let (suggestions, label) = picker.suggest_for_score(score, &policy);
    println!("Mood category: {label}");
    println!("{}", render_suggestions(&suggestions));
    Ok(())
}

fn render_pick(quote: &str, suggestions: &[&str]) -> String {
    format!(
        "💬 Mood Quote:\n  {quote}\n\n{}",
        render_suggestions(suggestions)
    )
}

fn render_suggestions(suggestions: &[&str]) -> String {
    let mut lines = vec!["🌱 Things You Can Do:".to_string()];
    lines.extend(suggestions.iter().map(|s| format!("  • {s}")));
    lines.join("\n")
}
