//! Tests for undo/redo levels, retention and redo invalidation

use std::fs;

use pretty_assertions::assert_eq;
use worldedit_edit::{CounterStore, HistoryLevels, MemoryCounterStore, NoViewers, Rectangle, Tile, World};

use crate::helpers::{RecordingViewers, create_editor, create_editor_with, numbered_world};

const ACCOUNT: &str = "builder";

#[test]
fn test_undo_restores_snapshot() {
    let (_dir, editor) = create_editor();
    let mut world = numbered_world(60, 40);
    let original = world.clone();
    let area = Rectangle::from_min_size((10, 10), (8, 6));

    assert_eq!(editor.history().record_undo(ACCOUNT, area, &world).unwrap(), 0);
    world.fill(area, Tile::block(99));
    let edited = world.clone();

    let mut viewers = RecordingViewers::default();
    assert!(editor.undo(ACCOUNT, &mut world, &mut viewers).unwrap());
    assert_eq!(world, original);
    assert_eq!(viewers.areas, vec![area]);
    assert_eq!(editor.history().levels(ACCOUNT).unwrap(), HistoryLevels::new(-1, 0));

    assert!(editor.redo(ACCOUNT, &mut world, &mut viewers).unwrap());
    assert_eq!(world, edited);
    assert_eq!(editor.history().levels(ACCOUNT).unwrap(), HistoryLevels::new(0, -1));
}

#[test]
fn test_undo_redo_is_repeatable() {
    let (_dir, editor) = create_editor();
    let mut world = numbered_world(30, 30);
    let original = world.clone();
    let area = Rectangle::from_min_size((0, 0), (5, 5));

    editor.history().record_undo(ACCOUNT, area, &world).unwrap();
    world.fill(area, Tile::default());
    let edited = world.clone();

    for _ in 0..3 {
        assert!(editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
        assert_eq!(world, original);
        assert!(editor.redo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
        assert_eq!(world, edited);
    }
}

#[test]
fn test_nothing_to_undo() {
    let (_dir, editor) = create_editor();
    let mut world = numbered_world(10, 10);
    let original = world.clone();

    assert!(!editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert!(!editor.redo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert_eq!(world, original);
    assert_eq!(editor.history().counters().levels(ACCOUNT).unwrap(), None);
}

#[test]
fn test_undo_stops_at_empty_stack() {
    let (_dir, editor) = create_editor();
    let mut world = numbered_world(10, 10);
    editor.history().record_undo(ACCOUNT, Rectangle::from_min_size((0, 0), (2, 2)), &world).unwrap();

    assert!(editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert!(!editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert_eq!(editor.history().levels(ACCOUNT).unwrap(), HistoryLevels::new(-1, 0));
}

#[test]
fn test_retention_keeps_last_snapshots() {
    let (_dir, editor) = create_editor();
    let world = numbered_world(10, 10);
    let area = Rectangle::from_min_size((1, 1), (2, 2));

    for _ in 0..55 {
        editor.history().record_undo(ACCOUNT, area, &world).unwrap();
    }

    assert_eq!(editor.history().levels(ACCOUNT).unwrap(), HistoryLevels::new(54, -1));
    assert_eq!(editor.history().undo_files(ACCOUNT).unwrap(), (5..=54).collect::<Vec<_>>());
}

#[test]
fn test_recording_drops_redo_stack() {
    let (_dir, editor) = create_editor();
    let mut world = numbered_world(20, 20);
    let area = Rectangle::from_min_size((2, 2), (3, 3));

    editor.history().record_undo(ACCOUNT, area, &world).unwrap();
    editor.history().record_undo(ACCOUNT, area, &world).unwrap();
    assert!(editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert!(editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert_eq!(editor.history().redo_files(ACCOUNT).unwrap(), vec![0, 1]);

    assert_eq!(editor.history().record_undo(ACCOUNT, area, &world).unwrap(), 0);
    assert!(editor.history().redo_files(ACCOUNT).unwrap().is_empty());
    assert_eq!(editor.history().levels(ACCOUNT).unwrap(), HistoryLevels::new(0, -1));
    assert!(!editor.redo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
}

#[test]
fn test_accounts_are_independent() {
    let (_dir, editor) = create_editor();
    let mut world = numbered_world(20, 20);
    let area = Rectangle::from_min_size((0, 0), (4, 4));

    editor.history().record_undo("alice", area, &world).unwrap();
    assert!(!editor.undo("bob", &mut world, &mut NoViewers).unwrap());
    assert!(editor.undo("alice", &mut world, &mut NoViewers).unwrap());
}

#[test]
fn test_missing_snapshot_keeps_levels() {
    let (_dir, editor) = create_editor();
    let mut world = numbered_world(10, 10);
    editor.history().record_undo(ACCOUNT, Rectangle::from_min_size((0, 0), (3, 3)), &world).unwrap();
    fs::remove_file(editor.storage().undo_path(ACCOUNT, 0)).unwrap();

    assert!(!editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert_eq!(editor.history().levels(ACCOUNT).unwrap(), HistoryLevels::new(0, -1));
}

#[test]
fn test_damaged_snapshot_fails_without_changes() {
    let (_dir, editor) = create_editor();
    let mut world = numbered_world(10, 10);
    let area = Rectangle::from_min_size((0, 0), (3, 3));
    editor.history().record_undo(ACCOUNT, area, &world).unwrap();
    world.fill(area, Tile::block(7));
    let edited = world.clone();
    fs::write(editor.storage().undo_path(ACCOUNT, 0), b"not a section").unwrap();

    assert!(editor.undo(ACCOUNT, &mut world, &mut NoViewers).is_err());
    assert_eq!(world, edited);
    assert_eq!(editor.history().levels(ACCOUNT).unwrap(), HistoryLevels::new(0, -1));
}

#[test]
fn test_snapshot_is_clipped_to_world() {
    let (_dir, editor) = create_editor();
    let mut world = numbered_world(10, 10);
    let original = world.clone();

    editor.history().record_undo(ACCOUNT, Rectangle::from_min_size((-5, 7), (20, 20)), &world).unwrap();
    let header = editor
        .format()
        .read_header(&editor.storage().undo_path(ACCOUNT, 0), worldedit_edit::HeaderConvention::Region)
        .unwrap();
    assert_eq!(header.rect(), Rectangle::from_min_size((0, 7), (10, 3)));

    world.fill(world.bounds(), Tile::default());
    assert!(editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    for x in 0..10 {
        assert_eq!(world.tile(x, 8), original.tile(x, 8));
        assert_eq!(world.tile(x, 2), Some(Tile::default()));
    }
}

#[test]
fn test_zeroed_counter_dialect() {
    let (_dir, editor) = create_editor_with(MemoryCounterStore::with_initial_levels(HistoryLevels::ZEROED));
    let mut world = numbered_world(10, 10);

    // level 0 was never written, so there is nothing to restore
    assert!(!editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());

    assert_eq!(editor.history().record_undo(ACCOUNT, Rectangle::from_min_size((0, 0), (2, 2)), &world).unwrap(), 1);
    assert!(editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert_eq!(editor.history().levels(ACCOUNT).unwrap(), HistoryLevels::new(0, 0));
    assert!(editor.redo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert_eq!(editor.history().levels(ACCOUNT).unwrap(), HistoryLevels::new(1, -1));
}

#[test]
fn test_stale_snapshot_is_overwritten() {
    let (_dir, editor) = create_editor();
    let mut world = numbered_world(20, 20);
    let original = world.clone();
    let area = Rectangle::from_min_size((3, 3), (4, 4));

    editor.history().record_undo(ACCOUNT, area, &world).unwrap();
    world.fill(area, Tile::block(7));
    let edited = world.clone();
    assert!(editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert_eq!(editor.history().levels(ACCOUNT).unwrap(), HistoryLevels::new(-1, 0));

    // a restored snapshot that could not be deleted stays behind
    let stale = editor.storage().undo_path(ACCOUNT, 0);
    assert!(!stale.exists());
    fs::copy(editor.storage().redo_path(ACCOUNT, 0), &stale).unwrap();

    assert!(editor.redo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert_eq!(world, edited);
    assert_eq!(editor.history().levels(ACCOUNT).unwrap(), HistoryLevels::new(0, -1));

    assert!(editor.undo(ACCOUNT, &mut world, &mut NoViewers).unwrap());
    assert_eq!(world, original);
}
