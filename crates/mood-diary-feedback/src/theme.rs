//! Mood colours and emoji

use mood_diary_core::MoodLabel;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodTheme {
    pub background: &'static str,
    pub text: &'static str,
}

impl MoodTheme {
    pub fn for_label(label: MoodLabel) -> Self {
        let background = match label {
            MoodLabel::Positive => "#fff9c4",
            MoodLabel::Negative => "#e3f2fd",
            MoodLabel::Neutral => "#f3e5f5",
        };
        Self {
            background,
            text: "#333",
        }
    }
}

pub fn mood_emoji(label: MoodLabel) -> &'static str {
    match label {
        MoodLabel::Positive => "☺️",
        MoodLabel::Neutral => "🙂",
        MoodLabel::Negative => "😞",
    }
}
