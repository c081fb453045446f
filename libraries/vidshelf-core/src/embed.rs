//! Embedded player addressing
//!
//! The catalog stores the link exactly as entered. The player key is pulled
//! out of the link's `v` query parameter each time a video is rendered.

use url::Url;

/// Base address of the embedded player
pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Extract the player key (the `v` query parameter) from a video link
///
/// Returns `None` when the link is not an absolute URL or carries no
/// non-empty `v` parameter. When `v` repeats, the first value wins.
pub fn video_key(source_url: &str) -> Option<String> {
    let url = Url::parse(source_url.trim()).ok()?;
    url.query_pairs()
        .find(|(name, _)| name == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Build the embedded player address for a video link
pub fn embed_url(source_url: &str) -> Option<String> {
    video_key(source_url).map(|key| format!("{EMBED_BASE_URL}{key}"))
}
