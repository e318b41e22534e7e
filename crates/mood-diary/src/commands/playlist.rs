use mood_diary_core::MoodLabel;
use mood_diary_feedback::{to_embed_url, PlaylistCursor};

use crate::diary::Diary;

pub fn run(diary: &mut Diary, mood: Option<MoodLabel>, next: bool) -> anyhow::Result<()> {
    let label = match mood {
        Some(label) => label,
        None => latest_mood(diary)?,
    };

    let mut cursor = PlaylistCursor::new(diary.settings.playlist_index);
    if next {
        cursor.advance();
        diary.settings.playlist_index = cursor.index();
        diary.save_settings()?;
    }

    match cursor.current(label) {
        Some(link) => println!("🎶 Here's a playlist for your {label} mood:\n{link}"),
        None => println!("No playlist for a {label} mood."),
    }
    Ok(())
}

pub fn run_link(link: &str) -> anyhow::Result<()> {
    match to_embed_url(link) {
        Some(embed) => println!("{embed}"),
        None => println!("⚠️ Please enter a valid Spotify playlist link."),
    }
    Ok(())
}

/// Mood of the newest entry under the playlist policy, neutral when empty
fn latest_mood(diary: &Diary) -> anyhow::Result<MoodLabel> {
    let config = diary.config();
    let store = diary.load_entries()?;
    let label = store
        .newest_first()
        .next()
        .map(|e| config.playlist_policy.label(e.sentiment_score))
        .unwrap_or(MoodLabel::Neutral);
    Ok(label)
}
