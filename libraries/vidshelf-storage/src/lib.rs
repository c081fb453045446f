//! Vidshelf Storage
//!
//! Catalog and session persistence on top of a key-value store.
//!
//! # Architecture
//!
//! - **Whole-Document Collections**: videos and playlists are each one JSON
//!   array under a fixed key; every write replaces the whole array
//! - **Injected Backend**: everything runs against `Arc<dyn KeyValueStore>`,
//!   either [`MemoryStore`] or the on-disk [`RedbStore`]
//! - **Vertical Slicing**: `videos`, `playlists` and `session` each own their
//!   reads, writes and rules
//! - **Last Write Wins**: no locking across processes; two writers sharing a
//!   store file each overwrite the other's collection
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vidshelf_core::{Catalog, CatalogSelection, NewPlaylist, NewVideo};
//! use vidshelf_storage::{CatalogRepository, MemoryStore};
//!
//! # fn example() -> vidshelf_core::Result<()> {
//! let catalog = CatalogRepository::new(Arc::new(MemoryStore::new()));
//!
//! let math = catalog.add_playlist(NewPlaylist::new("Math", "Lectures"))?;
//! catalog.add_video(
//!     NewVideo::new("Intro", "First lecture", "https://youtube.com/watch?v=abc123")
//!         .in_playlist(math.id.clone()),
//! )?;
//!
//! let shown = catalog.list_selection(&CatalogSelection::Playlist(math.id))?;
//! assert_eq!(shown.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod collection;
mod context;
mod error;

pub mod backends;

// Vertical slices
pub mod playlists;
pub mod session;
pub mod videos;

pub use backends::{MemoryStore, RedbStore};
pub use context::CatalogRepository;
pub use error::StorageError;
pub use session::{AdminCredentials, SessionStore};

/// Key holding the JSON array of videos
pub const VIDEOS_KEY: &str = "youtube_videos";

/// Key holding the JSON array of playlists
pub const PLAYLISTS_KEY: &str = "playlists";

/// Key holding the persisted admin session flag
pub const SESSION_KEY: &str = "auth-storage";
