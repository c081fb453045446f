/// Command handlers
pub mod admin;
pub mod auth;
pub mod browse;
pub mod playlists;
pub mod videos;

use crate::error::{CliError, Result};
use crate::state::AppState;
use vidshelf_core::{Catalog, PlaylistId};

/// Resolve a playlist id typed by the user, failing if it doesn't exist
pub(crate) fn existing_playlist(state: &AppState, id: &str) -> Result<PlaylistId> {
    let id = PlaylistId::new(id.trim());
    match state.catalog.find_playlist(&id)? {
        Some(playlist) => Ok(playlist.id),
        None => Err(CliError::NotFound(format!("playlist {id}"))),
    }
}
