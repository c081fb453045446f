use crate::{collection, videos, PLAYLISTS_KEY};
use std::collections::HashSet;
use vidshelf_core::{error::Result, types::*, KeyValueStore};

/// Get all playlists in stored order
pub fn get_all(store: &dyn KeyValueStore) -> Result<Vec<Playlist>> {
    collection::load(store, PLAYLISTS_KEY)
}

/// Get playlist by ID
pub fn get_by_id(store: &dyn KeyValueStore, id: &PlaylistId) -> Result<Option<Playlist>> {
    Ok(get_all(store)?.into_iter().find(|p| &p.id == id))
}

/// Create new playlist
pub fn create(store: &dyn KeyValueStore, input: NewPlaylist) -> Result<Playlist> {
    input.validate()?;

    let mut playlists: Vec<Playlist> = collection::load_for_write(store, PLAYLISTS_KEY)?;
    let playlist = Playlist::create(input);
    playlists.push(playlist.clone());
    collection::save(store, PLAYLISTS_KEY, &playlists)?;

    tracing::info!(id = %playlist.id, title = %playlist.title, "Playlist added");
    Ok(playlist)
}

/// Delete playlist and unassign its videos
///
/// Two separate writes: the playlist collection first, then the video
/// collection. The video pass runs even when the playlist was already gone,
/// which also clears references left behind by an earlier interrupted delete.
pub fn delete(store: &dyn KeyValueStore, id: &PlaylistId) -> Result<()> {
    let mut playlists: Vec<Playlist> = collection::load_for_write(store, PLAYLISTS_KEY)?;
    let before = playlists.len();
    playlists.retain(|p| &p.id != id);

    if playlists.len() != before {
        collection::save(store, PLAYLISTS_KEY, &playlists)?;
        tracing::info!(%id, "Playlist deleted");
    }

    let cleared = videos::unassign_where(store, |playlist_id| playlist_id == id).map_err(|e| {
        tracing::error!(%id, error = %e, "Playlist removed but its videos were not unassigned");
        e
    })?;

    if cleared > 0 {
        tracing::info!(%id, cleared, "Videos moved to unassigned");
    }
    Ok(())
}

/// Unassign videos pointing at playlists that no longer exist
///
/// An unreadable playlist collection is an error rather than "no playlists",
/// which would orphan every video.
pub fn prune_dangling_references(store: &dyn KeyValueStore) -> Result<usize> {
    let known: HashSet<PlaylistId> = collection::load_for_write::<Playlist>(store, PLAYLISTS_KEY)?
        .into_iter()
        .map(|p| p.id)
        .collect();
    let cleared = videos::unassign_where(store, |playlist_id| !known.contains(playlist_id))?;

    if cleared > 0 {
        tracing::warn!(cleared, "Cleared dangling playlist references");
    }
    Ok(cleared)
}
