//! Visibility rules for rendering the catalog
//!
//! Two independent decisions are made per render: which videos belong to the
//! current selection ([`CatalogSelection`]), and how much of each video the
//! current session may see ([`Visibility`]).

use crate::types::{PlaylistId, Video};

/// How much of a video the viewer may see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Player, title and description
    Full,
    /// Title and lock marker only; player and description are replaced by a
    /// sign-in prompt
    Locked,
}

impl Visibility {
    /// Public videos are always shown in full; private ones only to an
    /// authenticated session
    pub fn of(is_private: bool, authenticated: bool) -> Self {
        if !is_private || authenticated {
            Self::Full
        } else {
            Self::Locked
        }
    }

    pub fn for_video(video: &Video, authenticated: bool) -> Self {
        Self::of(video.is_private, authenticated)
    }

    pub fn is_full(self) -> bool {
        self == Self::Full
    }
}

/// Which part of the catalog is on screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSelection {
    /// Default view: videos without a playlist
    #[default]
    Unassigned,
    /// Videos of exactly one playlist
    Playlist(PlaylistId),
}

impl CatalogSelection {
    /// `None` selects the default view
    pub fn from_playlist(playlist_id: Option<PlaylistId>) -> Self {
        playlist_id.map_or(Self::Unassigned, Self::Playlist)
    }

    pub fn matches(&self, video: &Video) -> bool {
        match self {
            Self::Unassigned => video.playlist_id.is_none(),
            Self::Playlist(id) => video.playlist_id.as_ref() == Some(id),
        }
    }

    /// Filter a catalog down to this selection, keeping stored order
    pub fn apply<'a>(&self, videos: &'a [Video]) -> Vec<&'a Video> {
        videos.iter().filter(|video| self.matches(video)).collect()
    }
}
