use mood_diary_core::{Config, MoodLabel, SentimentClassifier};
use mood_diary_feedback::{catalog, Insight, MoodTheme, Picker, PlaylistCursor};

#[test]
fn test_heavy_entry_gets_support_and_prompt() {
    let classifier = SentimentClassifier::new(&Config::default());
    let mut picker = Picker::seeded(11);

    let c = classifier.classify("What if they think I ruined everything again");
    let insight = Insight::derive(&c, &mut picker);

    let rendered = insight.render();
    assert!(rendered.contains("Gentle insight"));
    assert!(rendered.contains("ruined"));
    assert!(rendered.contains("Support:"));
    assert!(rendered.contains("Prompt:"));
}

#[test]
fn test_theme_follows_classification_label() {
    let classifier = SentimentClassifier::default();
    let c = classifier.classify("This was a wonderful, joyful afternoon");
    assert_eq!(c.label, MoodLabel::Positive);
    assert_eq!(MoodTheme::for_label(c.label).background, "#fff9c4");
}

#[test]
fn test_manual_mood_pick() {
    let mut picker = Picker::new();
    let quote = picker.quote(MoodLabel::Negative);
    let picks = picker.suggestions(MoodLabel::Negative);

    assert!(catalog::quotes(MoodLabel::Negative).contains(&quote));
    assert_eq!(picks.len(), 2);
    assert_ne!(picks[0], picks[1]);
}

#[test]
fn test_playlist_for_score_uses_playlist_policy() {
    let config = Config::default();
    let cursor = PlaylistCursor::default();
    let label = config.playlist_policy.label(0.15);
    assert_eq!(label, MoodLabel::Positive);
    assert_eq!(
        cursor.current(label),
        Some(catalog::playlists(MoodLabel::Positive)[0])
    );
}
