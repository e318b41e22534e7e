//! Playlist rotation and Spotify link conversion

use mood_diary_core::MoodLabel;

use crate::catalog;

/// Rotating position into the per-mood playlist tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaylistCursor {
    index: usize,
}

impl PlaylistCursor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Playlist for `label` at the current position, wrapping around
    pub fn current(&self, label: MoodLabel) -> Option<&'static str> {
        let playlists = catalog::playlists(label);
        if playlists.is_empty() {
            return None;
        }
        playlists.get(self.index % playlists.len()).copied()
    }

    pub fn advance(&mut self) {
        self.index = self.index.wrapping_add(1);
        tracing::debug!(index = self.index, "playlist advanced");
    }
}

/// Convert a Spotify share link into its embeddable form
///
/// Non-Spotify links and links without a `<type>/<id>` path yield `None`;
/// links that are already embeds are returned unchanged.
pub fn to_embed_url(link: &str) -> Option<String> {
    let link = link.trim();
    if !link.contains("spotify.com") {
        return None;
    }
    if link.contains("embed") {
        return Some(link.to_string());
    }

    let (_, rest) = link.split_once("spotify.com/")?;
    let path = rest.split('?').next().unwrap_or_default();
    let parts: Vec<&str> = path.split('/').collect();
    match parts.as_slice() {
        [kind, id] if !kind.is_empty() && !id.is_empty() => {
            Some(format!("https://open.spotify.com/embed/{kind}/{id}"))
        }
        _ => None,
    }
}
