use crate::{playlists, videos};
use std::sync::Arc;
use vidshelf_core::{catalog::Catalog, error::Result, types::*, KeyValueStore};

/// Catalog repository over an injected key-value store
///
/// Sole owner and writer of the video and playlist collections. Cloning is
/// cheap and every clone writes to the same backend.
#[derive(Clone)]
pub struct CatalogRepository {
    store: Arc<dyn KeyValueStore>,
}

impl CatalogRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl Catalog for CatalogRepository {
    // Videos
    fn list_videos(&self) -> Result<Vec<Video>> {
        videos::get_all(self.store.as_ref())
    }

    fn find_video(&self, id: &VideoId) -> Result<Option<Video>> {
        videos::get_by_id(self.store.as_ref(), id)
    }

    fn add_video(&self, input: NewVideo) -> Result<Video> {
        videos::create(self.store.as_ref(), input)
    }

    fn update_video(&self, video: Video) -> Result<()> {
        videos::update(self.store.as_ref(), video).map(|_| ())
    }

    fn delete_video(&self, id: &VideoId) -> Result<()> {
        videos::delete(self.store.as_ref(), id).map(|_| ())
    }

    fn list_videos_by_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<Video>> {
        videos::get_by_playlist(self.store.as_ref(), playlist_id)
    }

    fn list_unassigned_videos(&self) -> Result<Vec<Video>> {
        videos::get_unassigned(self.store.as_ref())
    }

    // Playlists
    fn list_playlists(&self) -> Result<Vec<Playlist>> {
        playlists::get_all(self.store.as_ref())
    }

    fn find_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_by_id(self.store.as_ref(), id)
    }

    fn add_playlist(&self, input: NewPlaylist) -> Result<Playlist> {
        playlists::create(self.store.as_ref(), input)
    }

    fn delete_playlist(&self, id: &PlaylistId) -> Result<()> {
        playlists::delete(self.store.as_ref(), id)
    }

    fn prune_dangling_references(&self) -> Result<usize> {
        playlists::prune_dangling_references(self.store.as_ref())
    }
}
