/// Video commands (admin only)
use crate::{
    api::existing_playlist,
    error::{CliError, Result},
    guard::AdminSession,
    state::AppState,
};
use vidshelf_core::{Catalog, NewVideo, Video, VideoId};

#[derive(Debug)]
pub struct AddVideoRequest {
    pub title: String,
    pub description: String,
    pub url: String,
    pub playlist: Option<String>,
    pub private: bool,
}

/// What to do with a video's playlist on update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaylistChange {
    #[default]
    Keep,
    Assign(String),
    Unassign,
}

#[derive(Debug, Default)]
pub struct UpdateVideoRequest {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub playlist: PlaylistChange,
    pub private: Option<bool>,
}

/// `vidshelf video add`
pub fn add(app_state: &AppState, _admin: AdminSession, req: AddVideoRequest) -> Result<Video> {
    let mut input = NewVideo::new(req.title, req.description, req.url.trim()).private(req.private);
    if let Some(playlist) = req.playlist.as_deref() {
        input = input.in_playlist(existing_playlist(app_state, playlist)?);
    }

    if vidshelf_core::embed::video_key(&input.source_url).is_none() {
        tracing::warn!(url = %input.source_url, "Link has no `v` parameter, the player will be empty");
    }

    let created = app_state.catalog.add_video(input)?;

    // Re-read rather than trusting the returned copy
    app_state
        .catalog
        .find_video(&created.id)?
        .ok_or_else(|| CliError::NotFound(format!("video {}", created.id)))
}

/// `vidshelf video update`
pub fn update(app_state: &AppState, _admin: AdminSession, req: UpdateVideoRequest) -> Result<Video> {
    let id = VideoId::new(req.id.trim());
    let mut video = app_state
        .catalog
        .find_video(&id)?
        .ok_or_else(|| CliError::NotFound(format!("video {id}")))?;

    if let Some(title) = req.title {
        video.title = title;
    }
    if let Some(description) = req.description {
        video.description = description;
    }
    if let Some(url) = req.url {
        video.source_url = url.trim().to_string();
    }
    match req.playlist {
        PlaylistChange::Keep => {}
        PlaylistChange::Assign(playlist) => {
            video.playlist_id = Some(existing_playlist(app_state, &playlist)?);
        }
        PlaylistChange::Unassign => video.playlist_id = None,
    }
    if let Some(private) = req.private {
        video.is_private = private;
    }

    app_state.catalog.update_video(video)?;

    app_state
        .catalog
        .find_video(&id)?
        .ok_or_else(|| CliError::NotFound(format!("video {id}")))
}

/// `vidshelf video delete`
///
/// Returns whether a video was removed.
pub fn delete(app_state: &AppState, _admin: AdminSession, id: &str) -> Result<bool> {
    let id = VideoId::new(id.trim());
    let existed = app_state.catalog.find_video(&id)?.is_some();
    app_state.catalog.delete_video(&id)?;
    Ok(existed)
}

/// `vidshelf video list`
pub fn list(app_state: &AppState, _admin: AdminSession) -> Result<Vec<Video>> {
    Ok(app_state.catalog.list_videos()?)
}
