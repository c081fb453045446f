//! Vidshelf Core
//!
//! Platform-agnostic domain types, traits, and error handling for Vidshelf.
//!
//! This crate provides the building blocks shared by the storage layer and
//! the command-line front-end.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Video`, `Playlist` and their creation inputs
//! - **Core Traits**: `KeyValueStore`, the persistent store the catalog lives in,
//!   and `Catalog`, the repository contract over it
//! - **View Rules**: `Visibility` and `CatalogSelection`
//! - **Error Handling**: Unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use vidshelf_core::types::{NewPlaylist, NewVideo, Playlist, Video};
//! use vidshelf_core::{CatalogSelection, Visibility};
//!
//! let math = Playlist::create(NewPlaylist::new("Math", "Lectures"));
//! let intro = Video::create(
//!     NewVideo::new("Intro", "First lecture", "https://youtube.com/watch?v=abc123")
//!         .in_playlist(math.id.clone()),
//! );
//!
//! assert!(CatalogSelection::Playlist(math.id.clone()).matches(&intro));
//! assert_eq!(Visibility::for_video(&intro, false), Visibility::Full);
//! assert_eq!(
//!     intro.embed_url().as_deref(),
//!     Some("https://www.youtube.com/embed/abc123")
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod embed;
pub mod error;
pub mod traits;
pub mod types;
pub mod visibility;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use traits::KeyValueStore;
pub use visibility::{CatalogSelection, Visibility};

pub use types::{NewPlaylist, NewVideo, Playlist, PlaylistId, Video, VideoId};
