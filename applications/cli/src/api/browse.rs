/// Public browse view
use crate::{
    api::existing_playlist,
    error::Result,
    state::AppState,
};
use chrono::{DateTime, Utc};
use vidshelf_core::{Catalog, CatalogSelection, Playlist, Video, VideoId, Visibility};

#[derive(Debug, Default)]
pub struct BrowseRequest {
    /// Playlist to open; `None` shows the unassigned videos
    pub playlist: Option<String>,
}

/// What a card shows below its title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardContent {
    Player {
        /// `None` when the stored link has no player key
        embed_url: Option<String>,
        description: String,
    },
    /// Private video, viewer not signed in
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub id: VideoId,
    pub title: String,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub content: CardContent,
}

impl VideoCard {
    pub fn new(video: Video, authenticated: bool) -> Self {
        let content = match Visibility::for_video(&video, authenticated) {
            Visibility::Full => CardContent::Player {
                embed_url: video.embed_url(),
                description: video.description,
            },
            Visibility::Locked => CardContent::Locked,
        };

        Self {
            id: video.id,
            title: video.title,
            is_private: video.is_private,
            created_at: video.created_at,
            content,
        }
    }
}

#[derive(Debug)]
pub struct BrowsePage {
    pub playlists: Vec<Playlist>,
    /// Open playlist, `None` for the unassigned view
    pub selected: Option<Playlist>,
    pub cards: Vec<VideoCard>,
    pub authenticated: bool,
}

/// `vidshelf browse`
pub fn browse(app_state: &AppState, req: BrowseRequest) -> Result<BrowsePage> {
    let playlists = app_state.catalog.list_playlists()?;

    let selection = match req.playlist.as_deref() {
        Some(id) => CatalogSelection::Playlist(existing_playlist(app_state, id)?),
        None => CatalogSelection::Unassigned,
    };
    let selected = match &selection {
        CatalogSelection::Playlist(id) => playlists.iter().find(|p| &p.id == id).cloned(),
        CatalogSelection::Unassigned => None,
    };

    let authenticated = app_state.session.is_authenticated();
    let cards = app_state
        .catalog
        .list_selection(&selection)?
        .into_iter()
        .map(|video| VideoCard::new(video, authenticated))
        .collect();

    Ok(BrowsePage {
        playlists,
        selected,
        cards,
        authenticated,
    })
}
