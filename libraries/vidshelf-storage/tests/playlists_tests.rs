//! Integration tests for the playlists vertical slice
//!
//! Tests playlist operations including:
//! - Creation and listing
//! - Cascade delete (videos become unassigned, nothing else changes)
//! - Repair of references left behind by an interrupted delete

mod test_helpers;

use test_helpers::*;
use vidshelf_core::{Catalog, CatalogError, NewPlaylist, PlaylistId};
use vidshelf_storage::{videos, PLAYLISTS_KEY};

#[test]
fn test_create_and_list_playlists() {
    let catalog = TestCatalog::in_memory();

    let math = create_test_playlist(&catalog.repo, "Math");
    let art = catalog
        .repo
        .add_playlist(NewPlaylist::new("Art", "Studio sessions").private(true))
        .unwrap();

    assert!(!math.is_private);
    assert!(art.is_private);
    assert_ne!(math.id, art.id);
    assert_eq!(catalog.repo.list_playlists().unwrap(), vec![math.clone(), art]);
    assert_eq!(catalog.repo.find_playlist(&math.id).unwrap(), Some(math));
}

#[test]
fn test_blank_playlist_title_is_rejected() {
    let catalog = TestCatalog::in_memory();
    let err = catalog
        .repo
        .add_playlist(NewPlaylist::new(" ", "desc"))
        .unwrap_err();

    assert!(matches!(err, CatalogError::InvalidInput(_)));
    assert_eq!(catalog.store.get(PLAYLISTS_KEY).unwrap(), None);
}

#[test]
fn test_math_playlist_scenario() {
    let catalog = TestCatalog::in_memory();
    let repo = &catalog.repo;

    let math = create_test_playlist(repo, "Math");
    let intro = create_test_video(repo, "Intro", Some(&math.id));

    assert_eq!(repo.list_videos_by_playlist(&math.id).unwrap(), vec![intro.clone()]);

    repo.delete_playlist(&math.id).unwrap();

    let videos = repo.list_videos().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, intro.id);
    assert_eq!(videos[0].playlist_id, None);
    assert!(repo.list_playlists().unwrap().iter().all(|p| p.title != "Math"));
}

#[test]
fn test_delete_playlist_only_touches_its_videos() {
    let catalog = TestCatalog::in_memory();
    let repo = &catalog.repo;
    let math = create_test_playlist(repo, "Math");
    let art = create_test_playlist(repo, "Art");

    let loose = create_test_video(repo, "Loose", None);
    let algebra = create_test_video(repo, "Algebra", Some(&math.id));
    let painting = create_test_video(repo, "Painting", Some(&art.id));

    repo.delete_playlist(&math.id).unwrap();

    let videos = repo.list_videos().unwrap();
    let mut expected_algebra = algebra;
    expected_algebra.playlist_id = None;
    assert_eq!(videos, vec![loose, expected_algebra, painting]);
    assert_eq!(repo.list_playlists().unwrap(), vec![art]);
}

#[test]
fn test_delete_unknown_playlist_is_noop() {
    let catalog = TestCatalog::in_memory();
    let math = create_test_playlist(&catalog.repo, "Math");
    let video = create_test_video(&catalog.repo, "Algebra", Some(&math.id));

    catalog.repo.delete_playlist(&PlaylistId::new("nope")).unwrap();

    assert_eq!(catalog.repo.list_playlists().unwrap(), vec![math]);
    assert_eq!(catalog.repo.list_videos().unwrap(), vec![video]);
}

#[test]
fn test_delete_missing_playlist_still_clears_stale_references() {
    let catalog = TestCatalog::in_memory();
    let math = create_test_playlist(&catalog.repo, "Math");
    create_test_video(&catalog.repo, "Algebra", Some(&math.id));

    // Simulate an interrupted delete: playlist gone, video still points at it
    catalog.store.set(PLAYLISTS_KEY, "[]").unwrap();

    catalog.repo.delete_playlist(&math.id).unwrap();
    assert!(catalog.repo.list_videos().unwrap()[0].playlist_id.is_none());
}

#[test]
fn test_prune_dangling_references() {
    let catalog = TestCatalog::in_memory();
    let repo = &catalog.repo;
    let math = create_test_playlist(repo, "Math");
    let art = create_test_playlist(repo, "Art");
    create_test_video(repo, "Algebra", Some(&math.id));
    create_test_video(repo, "Geometry", Some(&math.id));
    let painting = create_test_video(repo, "Painting", Some(&art.id));

    // Drop Math from the playlist collection only
    catalog.store.set(PLAYLISTS_KEY, &serde_json::to_string(&[&art]).unwrap()).unwrap();

    assert_eq!(repo.prune_dangling_references().unwrap(), 2);
    assert_eq!(repo.prune_dangling_references().unwrap(), 0);

    assert_eq!(repo.list_unassigned_videos().unwrap().len(), 2);
    assert_eq!(repo.list_videos_by_playlist(&art.id).unwrap(), vec![painting]);
}

#[test]
fn test_unassign_where_reports_count_and_skips_write_when_nothing_matches() {
    let catalog = TestCatalog::in_memory();
    let math = create_test_playlist(&catalog.repo, "Math");
    create_test_video(&catalog.repo, "Algebra", Some(&math.id));

    let before = catalog.store.get(vidshelf_storage::VIDEOS_KEY).unwrap();
    let cleared = videos::unassign_where(catalog.store.as_ref(), |_| false).unwrap();
    assert_eq!(cleared, 0);
    assert_eq!(catalog.store.get(vidshelf_storage::VIDEOS_KEY).unwrap(), before);

    let cleared = videos::unassign_where(catalog.store.as_ref(), |id| id == &math.id).unwrap();
    assert_eq!(cleared, 1);
}

#[test]
fn test_unreadable_playlists_are_not_overwritten_or_pruned_against() {
    let catalog = TestCatalog::in_memory();
    let math = create_test_playlist(&catalog.repo, "Math");
    let video = create_test_video(&catalog.repo, "Algebra", Some(&math.id));

    catalog.store.set(PLAYLISTS_KEY, "[{\"id\":\"p1\"}]").unwrap();
    assert!(catalog.repo.list_playlists().unwrap().is_empty());

    let err = catalog
        .repo
        .add_playlist(NewPlaylist::new("Art", "Studio sessions"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Serialization(_)));

    // An unreadable playlist list must not orphan every video
    assert!(catalog.repo.prune_dangling_references().is_err());
    assert_eq!(catalog.repo.find_video(&video.id).unwrap(), Some(video));
    assert_eq!(
        catalog.store.get(PLAYLISTS_KEY).unwrap().as_deref(),
        Some("[{\"id\":\"p1\"}]")
    );
}
