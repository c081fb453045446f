//! Plain-text rendering of command results

use crate::api::auth::StatusResponse;
use crate::api::browse::{BrowsePage, CardContent, VideoCard};
use std::fmt::Write;
use vidshelf_core::{Playlist, Video};

const LOCK: &str = "[private]";

fn date(stamp: &chrono::DateTime<chrono::Utc>) -> String {
    stamp.format("%Y-%m-%d").to_string()
}

/// One card of the browse view
pub fn video_card(card: &VideoCard) -> String {
    let mut out = String::new();
    let lock = if card.is_private { format!(" {LOCK}") } else { String::new() };
    let _ = writeln!(out, "  {}{}  ({})", card.title, lock, date(&card.created_at));

    match &card.content {
        CardContent::Player {
            embed_url,
            description,
        } => {
            match embed_url {
                Some(url) => {
                    let _ = writeln!(out, "    {url}");
                }
                None => {
                    let _ = writeln!(out, "    (no playable link)");
                }
            }
            let _ = writeln!(out, "    {description}");
        }
        CardContent::Locked => {
            let _ = writeln!(out, "    This video is private. Sign in to watch.");
            let _ = writeln!(out, "    Sign in to view description");
        }
    }
    out
}

/// The public browse view: playlist picker, then the selected videos
pub fn browse_page(page: &BrowsePage) -> String {
    let mut out = String::new();

    if !page.playlists.is_empty() {
        let _ = writeln!(out, "Playlists:");
        for playlist in &page.playlists {
            let marker = match &page.selected {
                Some(selected) if selected.id == playlist.id => "*",
                _ => " ",
            };
            let _ = writeln!(out, " {marker} {}  {}", playlist.id, playlist.title);
        }
        let _ = writeln!(out);
    }

    match &page.selected {
        Some(playlist) => {
            let _ = writeln!(out, "{}", playlist.title);
            let _ = writeln!(out, "{}", playlist.description);
        }
        None => {
            let _ = writeln!(out, "Videos");
        }
    }
    let _ = writeln!(out);

    if page.cards.is_empty() {
        let _ = writeln!(out, "  No videos here yet.");
    }
    for card in &page.cards {
        out.push_str(&video_card(card));
    }
    out
}

/// Admin listing of every video
pub fn video_table(videos: &[Video]) -> String {
    let mut out = String::new();
    for video in videos {
        let playlist = video
            .playlist_id
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string);
        let lock = if video.is_private { LOCK } else { "" };
        let _ = writeln!(
            out,
            "{}  {}  playlist={}  {}",
            video.id, video.title, playlist, lock
        );
    }
    if videos.is_empty() {
        out.push_str("No videos.\n");
    }
    out
}

pub fn playlist_table(playlists: &[Playlist]) -> String {
    let mut out = String::new();
    for playlist in playlists {
        let _ = writeln!(
            out,
            "{}  {}  {}  ({})",
            playlist.id,
            playlist.title,
            playlist.description,
            date(&playlist.created_at)
        );
    }
    if playlists.is_empty() {
        out.push_str("No playlists.\n");
    }
    out
}

pub fn status(status: StatusResponse) -> String {
    let mut out = String::from(if status.authenticated {
        "Signed in as admin\n"
    } else {
        "Not signed in\n"
    });
    if !status.login_enabled {
        out.push_str("Login is disabled: admin credentials are not configured\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vidshelf_core::VideoId;

    fn card(content: CardContent, is_private: bool) -> VideoCard {
        VideoCard {
            id: VideoId::new("v1"),
            title: "Intro".to_string(),
            is_private,
            created_at: Utc::now(),
            content,
        }
    }

    #[test]
    fn locked_card_hides_player_and_description() {
        let out = video_card(&card(CardContent::Locked, true));
        assert!(out.contains("Intro [private]"));
        assert!(out.contains("Sign in to watch"));
        assert!(!out.contains("embed"));
    }

    #[test]
    fn open_card_shows_player_and_description() {
        let out = video_card(&card(
            CardContent::Player {
                embed_url: Some("https://www.youtube.com/embed/abc123".to_string()),
                description: "First lecture".to_string(),
            },
            false,
        ));
        assert!(out.contains("https://www.youtube.com/embed/abc123"));
        assert!(out.contains("First lecture"));
        assert!(!out.contains(LOCK));
    }

    #[test]
    fn status_reports_disabled_login() {
        let out = status(StatusResponse {
            authenticated: false,
            login_enabled: false,
        });
        assert!(out.contains("Not signed in"));
        assert!(out.contains("disabled"));
    }
}
