//! Test helpers and fixtures for storage integration tests
//!
//! `TestCatalog::on_disk` uses a REAL redb file in a temp dir so reopen and
//! durability paths run exactly as in production.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use vidshelf_core::{Catalog, KeyValueStore, NewPlaylist, NewVideo, Playlist, PlaylistId, Video};
use vidshelf_storage::{CatalogRepository, MemoryStore, RedbStore};

/// Catalog wrapper that keeps its temp dir alive until drop
pub struct TestCatalog {
    pub repo: CatalogRepository,
    pub store: Arc<dyn KeyValueStore>,
    path: Option<PathBuf>,
    _temp_dir: Option<TempDir>,
}

impl TestCatalog {
    /// Catalog over a fresh in-memory store
    pub fn in_memory() -> Self {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        Self {
            repo: CatalogRepository::new(store.clone()),
            store,
            path: None,
            _temp_dir: None,
        }
    }

    /// Catalog over a fresh redb file
    pub fn on_disk() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("catalog.redb");
        let store: Arc<dyn KeyValueStore> =
            Arc::new(RedbStore::open(&path).expect("Failed to open store"));

        Self {
            repo: CatalogRepository::new(store.clone()),
            store,
            path: Some(path),
            _temp_dir: Some(temp_dir),
        }
    }

    /// Close and reopen the on-disk store, as a restart would
    pub fn reopen(&mut self) {
        let path = self.path.clone().expect("reopen needs an on-disk catalog");
        // Release the old handle before opening the file again
        self.repo = CatalogRepository::new(Arc::new(MemoryStore::new()));
        self.store = Arc::new(MemoryStore::new());

        let store: Arc<dyn KeyValueStore> =
            Arc::new(RedbStore::open(&path).expect("Failed to reopen store"));
        self.repo = CatalogRepository::new(store.clone());
        self.store = store;
    }
}

/// Test fixture: Create a playlist
pub fn create_test_playlist(repo: &CatalogRepository, title: &str) -> Playlist {
    repo.add_playlist(NewPlaylist::new(title, format!("{title} description")))
        .expect("Failed to create test playlist")
}

/// Test fixture: Create a video, optionally inside a playlist
pub fn create_test_video(
    repo: &CatalogRepository,
    title: &str,
    playlist_id: Option<&PlaylistId>,
) -> Video {
    let mut input = NewVideo::new(
        title,
        format!("{title} description"),
        format!("https://youtube.com/watch?v={}", title.to_lowercase().replace(' ', "-")),
    );
    if let Some(id) = playlist_id {
        input = input.in_playlist(id.clone());
    }
    repo.add_video(input).expect("Failed to create test video")
}
