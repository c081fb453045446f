use crate::{collection, VIDEOS_KEY};
use vidshelf_core::{error::Result, types::*, KeyValueStore};

/// Get all videos in stored order
pub fn get_all(store: &dyn KeyValueStore) -> Result<Vec<Video>> {
    collection::load(store, VIDEOS_KEY)
}

/// Get all videos ahead of a rewrite, failing on an unreadable collection
fn get_all_for_write(store: &dyn KeyValueStore) -> Result<Vec<Video>> {
    collection::load_for_write(store, VIDEOS_KEY)
}

/// Replace the whole video collection
pub fn save_all(store: &dyn KeyValueStore, videos: &[Video]) -> Result<()> {
    collection::save(store, VIDEOS_KEY, videos)
}

/// Get video by ID
pub fn get_by_id(store: &dyn KeyValueStore, id: &VideoId) -> Result<Option<Video>> {
    Ok(get_all(store)?.into_iter().find(|v| &v.id == id))
}

/// Get videos assigned to a playlist
pub fn get_by_playlist(store: &dyn KeyValueStore, playlist_id: &PlaylistId) -> Result<Vec<Video>> {
    Ok(get_all(store)?
        .into_iter()
        .filter(|v| v.playlist_id.as_ref() == Some(playlist_id))
        .collect())
}

/// Get videos without a playlist
pub fn get_unassigned(store: &dyn KeyValueStore) -> Result<Vec<Video>> {
    Ok(get_all(store)?
        .into_iter()
        .filter(Video::is_unassigned)
        .collect())
}

/// Create new video
///
/// Assigns a fresh id and timestamp and appends it to the stored collection.
pub fn create(store: &dyn KeyValueStore, input: NewVideo) -> Result<Video> {
    input.validate()?;

    let mut videos = get_all_for_write(store)?;
    let video = Video::create(input);
    videos.push(video.clone());
    save_all(store, &videos)?;

    tracing::info!(id = %video.id, title = %video.title, "Video added");
    Ok(video)
}

/// Replace the stored video with the same id
///
/// Returns `false` (and writes nothing) when no stored video matches.
pub fn update(store: &dyn KeyValueStore, video: Video) -> Result<bool> {
    video.validate()?;

    let mut videos = get_all_for_write(store)?;
    let Some(slot) = videos.iter_mut().find(|v| v.id == video.id) else {
        tracing::debug!(id = %video.id, "Update skipped, no such video");
        return Ok(false);
    };

    *slot = video;
    save_all(store, &videos)?;
    Ok(true)
}

/// Delete video
///
/// Returns `false` (and writes nothing) when no stored video matches.
pub fn delete(store: &dyn KeyValueStore, id: &VideoId) -> Result<bool> {
    let mut videos = get_all_for_write(store)?;
    let before = videos.len();
    videos.retain(|v| &v.id != id);

    if videos.len() == before {
        tracing::debug!(%id, "Delete skipped, no such video");
        return Ok(false);
    }

    save_all(store, &videos)?;
    tracing::info!(%id, "Video deleted");
    Ok(true)
}

/// Unassign every video that matches `orphaned`
///
/// Writes the collection only when at least one video changed and returns
/// how many did.
pub fn unassign_where(
    store: &dyn KeyValueStore,
    orphaned: impl Fn(&PlaylistId) -> bool,
) -> Result<usize> {
    let mut videos = get_all_for_write(store)?;
    let mut cleared = 0;

    for video in &mut videos {
        if video.playlist_id.as_ref().is_some_and(&orphaned) {
            video.playlist_id = None;
            cleared += 1;
        }
    }

    if cleared > 0 {
        save_all(store, &videos)?;
    }
    Ok(cleared)
}
