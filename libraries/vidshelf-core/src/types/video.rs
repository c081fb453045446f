//! Video domain types

use super::ids::{PlaylistId, VideoId};
use super::require_text;
use crate::embed;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Externally hosted video in the catalog
///
/// Serialized with camelCase keys. The link is persisted as `youtubeUrl`
/// so catalogs written by the browser front-end load unchanged; `sourceUrl`
/// is accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Unique video identifier, assigned at creation
    pub id: VideoId,

    /// Display title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Link to the hosted video (the original URL, not the embed key)
    #[serde(rename = "youtubeUrl", alias = "sourceUrl")]
    pub source_url: String,

    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,

    /// Playlist this video belongs to; `None` means unassigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<PlaylistId>,

    /// Only visible to an authenticated admin
    #[serde(default)]
    pub is_private: bool,
}

impl Video {
    /// Create a video from user input, assigning a fresh id and timestamp
    pub fn create(input: NewVideo) -> Self {
        Self {
            id: VideoId::generate(),
            title: input.title,
            description: input.description,
            source_url: input.source_url,
            created_at: Utc::now(),
            playlist_id: input.playlist_id,
            is_private: input.is_private.unwrap_or(false),
        }
    }

    /// Check that the required text fields are filled in
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidInput` naming the first blank field
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        require_text("url", &self.source_url)
    }

    /// Whether the video sits in the default (no playlist) view
    pub fn is_unassigned(&self) -> bool {
        self.playlist_id.is_none()
    }

    /// Embed address for the hosted player, if the link carries a video key
    pub fn embed_url(&self) -> Option<String> {
        embed::embed_url(&self.source_url)
    }
}

/// Data for creating a new video
///
/// Everything a `Video` has except the id and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    #[serde(rename = "youtubeUrl", alias = "sourceUrl")]
    pub source_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<PlaylistId>,
    /// Defaults to `false` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

impl NewVideo {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            source_url: source_url.into(),
            playlist_id: None,
            is_private: None,
        }
    }

    /// Assign the video to a playlist
    #[must_use]
    pub fn in_playlist(mut self, playlist_id: PlaylistId) -> Self {
        self.playlist_id = Some(playlist_id);
        self
    }

    /// Mark the video private (or explicitly public)
    #[must_use]
    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = Some(is_private);
        self
    }

    /// Check that the required text fields are filled in
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidInput` naming the first blank field
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        require_text("url", &self.source_url)
    }
}
