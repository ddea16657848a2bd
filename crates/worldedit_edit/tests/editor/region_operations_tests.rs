//! Tests for region saves with container trailers

use pretty_assertions::assert_eq;
use worldedit_edit::{Container, EngineError, ItemStack, MAX_CONTAINERS, NoViewers, Position, Rectangle, Tile, TileGrid, World};

use crate::helpers::{RecordingViewers, create_editor, numbered_tile, numbered_world};

fn world_with_chests() -> TileGrid {
    let mut world = numbered_world(80, 60);
    world.place_container(Container::new((12, 14), "Ores").with_item(0, ItemStack::new(11, 99, 0)));
    world.place_container(Container::new((30, 30), "Elsewhere"));
    world
}

#[test]
fn test_region_round_trip_with_containers() {
    let (dir, editor) = create_editor();
    let world = world_with_chests();
    let area = Rectangle::from_min_size((10, 10), (8, 8));
    let path = dir.path().join("house.dat");

    assert_eq!(editor.save_region(area, &path, true, &world).unwrap(), 1);

    let mut target = TileGrid::new((80, 60));
    let mut viewers = RecordingViewers::default();
    let touched = editor.load_region(&path, true, &mut target, &mut viewers).unwrap();

    assert_eq!(touched, area);
    assert_eq!(viewers.areas, vec![area]);
    for pos in area.column_major() {
        assert_eq!(target.tile(pos.x, pos.y), Some(numbered_tile(pos.x, pos.y)));
    }
    assert_eq!(target.tile(9, 10), Some(Tile::default()));

    assert_eq!(target.containers().len(), 1);
    let chest = &target.containers()[0];
    assert_eq!(chest.position, Position::new(12, 14));
    assert_eq!(chest.name, "Ores");
    assert_eq!(chest.items[0], ItemStack::new(11, 99, 0));
}

#[test]
fn test_region_without_containers() {
    let (dir, editor) = create_editor();
    let world = world_with_chests();
    let area = Rectangle::from_min_size((10, 10), (8, 8));
    let path = dir.path().join("plain.dat");

    assert_eq!(editor.save_region(area, &path, false, &world).unwrap(), 0);
    let mut target = TileGrid::new((80, 60));
    editor.load_region(&path, false, &mut target, &mut NoViewers).unwrap();
    assert!(target.containers().is_empty());
    assert_eq!(target.tile(17, 17), Some(numbered_tile(17, 17)));
}

#[test]
fn test_region_load_is_clipped() {
    let (dir, editor) = create_editor();
    let world = numbered_world(80, 60);
    let area = Rectangle::from_min_size((70, 50), (10, 10));
    let path = dir.path().join("corner.dat");
    editor.save_region(area, &path, false, &world).unwrap();

    let mut small = TileGrid::new((75, 55));
    let touched = editor.load_region(&path, false, &mut small, &mut NoViewers).unwrap();
    assert_eq!(touched, Rectangle::from_min_size((70, 50), (5, 5)));
    assert_eq!(small.tile(74, 54), Some(numbered_tile(74, 54)));
}

#[test]
fn test_region_load_with_full_container_table() {
    let (dir, editor) = create_editor();
    let world = world_with_chests();
    let path = dir.path().join("house.dat");
    editor.save_region(Rectangle::from_min_size((10, 10), (8, 8)), &path, true, &world).unwrap();

    let mut target = TileGrid::new((80, 60));
    for _ in 0..MAX_CONTAINERS {
        target.place_container(Container::new((0, 0), ""));
    }
    editor.load_region(&path, true, &mut target, &mut NoViewers).unwrap();
    assert_eq!(target.containers().len(), MAX_CONTAINERS);
    assert_eq!(target.tile(12, 14), Some(numbered_tile(12, 14)));
}

#[test]
fn test_missing_region() {
    let (dir, editor) = create_editor();
    let mut target = TileGrid::new((10, 10));
    let result = editor.load_region(&dir.path().join("nothing.dat"), true, &mut target, &mut NoViewers);
    assert!(matches!(result, Err(EngineError::NotFound { .. })));
}
