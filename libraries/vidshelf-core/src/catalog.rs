//! Catalog repository contract

use crate::error::Result;
use crate::types::{NewPlaylist, NewVideo, Playlist, PlaylistId, Video, VideoId};
use crate::visibility::CatalogSelection;

/// Catalog of videos and playlists
///
/// Every write re-serializes the whole affected collection. Missing records
/// are never an error: deleting or updating an unknown id is a no-op.
///
/// Listing an unreadable collection yields nothing, but writing to one fails
/// with `CatalogError::Serialization` and leaves the stored document as is.
pub trait Catalog {
    // ========================================================================
    // Videos
    // ========================================================================

    /// All videos, in stored order
    fn list_videos(&self) -> Result<Vec<Video>>;

    /// Video by ID
    fn find_video(&self, id: &VideoId) -> Result<Option<Video>>;

    /// Store a new video with a fresh id and timestamp
    fn add_video(&self, input: NewVideo) -> Result<Video>;

    /// Replace the stored video with the same id
    fn update_video(&self, video: Video) -> Result<()>;

    /// Remove a video
    fn delete_video(&self, id: &VideoId) -> Result<()>;

    /// Videos assigned to `playlist_id`
    fn list_videos_by_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<Video>>;

    /// Videos without a playlist (the default view)
    fn list_unassigned_videos(&self) -> Result<Vec<Video>>;

    /// Videos matching a view selection
    fn list_selection(&self, selection: &CatalogSelection) -> Result<Vec<Video>> {
        match selection {
            CatalogSelection::Unassigned => self.list_unassigned_videos(),
            CatalogSelection::Playlist(id) => self.list_videos_by_playlist(id),
        }
    }

    // ========================================================================
    // Playlists
    // ========================================================================

    /// All playlists, in stored order
    fn list_playlists(&self) -> Result<Vec<Playlist>>;

    /// Playlist by ID
    fn find_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Store a new playlist with a fresh id and timestamp
    fn add_playlist(&self, input: NewPlaylist) -> Result<Playlist>;

    /// Remove a playlist, then unassign every video that referenced it
    ///
    /// The two collections are written separately. If the second write
    /// fails the error is returned and videos may still reference the
    /// removed playlist; [`Catalog::prune_dangling_references`] repairs that.
    fn delete_playlist(&self, id: &PlaylistId) -> Result<()>;

    /// Unassign videos whose playlist no longer exists
    ///
    /// Returns the number of videos repaired.
    fn prune_dangling_references(&self) -> Result<usize>;
}
