/// Playlist commands
use crate::{
    error::{CliError, Result},
    guard::AdminSession,
    state::AppState,
};
use vidshelf_core::{Catalog, NewPlaylist, Playlist, PlaylistId};

#[derive(Debug)]
pub struct AddPlaylistRequest {
    pub title: String,
    pub description: String,
    pub private: bool,
}

/// `vidshelf playlist add`
pub fn add(app_state: &AppState, _admin: AdminSession, req: AddPlaylistRequest) -> Result<Playlist> {
    let created = app_state
        .catalog
        .add_playlist(NewPlaylist::new(req.title, req.description).private(req.private))?;

    app_state
        .catalog
        .find_playlist(&created.id)?
        .ok_or_else(|| CliError::NotFound(format!("playlist {}", created.id)))
}

/// `vidshelf playlist delete`
///
/// Videos in the playlist move to the unassigned view. Returns whether a
/// playlist was removed.
pub fn delete(app_state: &AppState, _admin: AdminSession, id: &str) -> Result<bool> {
    let id = PlaylistId::new(id.trim());
    let existed = app_state.catalog.find_playlist(&id)?.is_some();
    app_state.catalog.delete_playlist(&id)?;
    Ok(existed)
}

/// `vidshelf playlist list`
///
/// Public: the browse view shows playlists to everyone.
pub fn list(app_state: &AppState) -> Result<Vec<Playlist>> {
    Ok(app_state.catalog.list_playlists()?)
}
