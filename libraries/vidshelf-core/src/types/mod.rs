mod ids;
mod playlist;
mod video;

pub use ids::{PlaylistId, VideoId};
pub use playlist::{NewPlaylist, Playlist};
pub use video::{NewVideo, Video};

use crate::error::{CatalogError, Result};

/// Reject blank text for a required field
pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid_input(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}
