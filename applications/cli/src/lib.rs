//! Vidshelf CLI Library
//!
//! Terminal front-end for the video catalog: a public browse view, admin
//! sign-in, and admin commands that curate videos and playlists.
//!
//! This library exposes the command handlers for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod render;
pub mod state;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{CliError, Result};
pub use guard::AdminSession;
pub use state::AppState;
