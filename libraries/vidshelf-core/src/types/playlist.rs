/// Playlist domain types
use super::ids::PlaylistId;
use super::require_text;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named group of videos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Playlist description
    pub description: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Stored and defaulted, but no view consults it
    #[serde(default)]
    pub is_private: bool,
}

impl Playlist {
    /// Create a new playlist
    pub fn create(input: NewPlaylist) -> Self {
        Self {
            id: PlaylistId::generate(),
            title: input.title,
            description: input.description,
            created_at: Utc::now(),
            is_private: input.is_private.unwrap_or(false),
        }
    }
}

/// Data for creating a new playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlaylist {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

impl NewPlaylist {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            is_private: None,
        }
    }

    #[must_use]
    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = Some(is_private);
        self
    }

    /// # Errors
    /// Returns `CatalogError::InvalidInput` naming the first blank field
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_creation() {
        let playlist = Playlist::create(NewPlaylist::new("Math", "Lectures"));

        assert_eq!(playlist.title, "Math");
        assert!(!playlist.is_private);
        assert!(playlist.created_at <= Utc::now());
    }

    #[test]
    fn empty_description_is_rejected() {
        assert!(NewPlaylist::new("Math", "").validate().is_err());
        assert!(NewPlaylist::new("Math", "Lectures").validate().is_ok());
    }
}
