//! Supportive feedback: quotes, suggestions, insights, themes and playlists

pub mod catalog;
mod insight;
mod playlist;
mod selection;
mod theme;

pub use insight::Insight;
pub use playlist::{to_embed_url, PlaylistCursor};
pub use selection::{Picker, SUGGESTION_COUNT};
pub use theme::{mood_emoji, MoodTheme};
