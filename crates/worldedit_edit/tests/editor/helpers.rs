use tempfile::TempDir;
use worldedit_edit::{
    EditConfig, FrameImportance, MemoryCounterStore, Rectangle, Size, Tile, TileGrid, ViewerSink, World, WorldEditor,
};

pub const CHEST: u16 = 21;

/// Helper to create an editor storing its files in a fresh temporary directory
pub fn create_editor() -> (TempDir, WorldEditor<MemoryCounterStore>) {
    create_editor_with(MemoryCounterStore::new())
}

pub fn create_editor_with(counters: MemoryCounterStore) -> (TempDir, WorldEditor<MemoryCounterStore>) {
    let dir = tempfile::tempdir().unwrap();
    let config = EditConfig {
        storage_dir: dir.path().join("worldedit"),
        ..Default::default()
    };
    let editor = WorldEditor::new(config, FrameImportance::from_ids(470, [CHEST]), counters);
    (dir, editor)
}

/// A world where every cell holds a different, non frame important block
pub fn numbered_world(width: i32, height: i32) -> TileGrid {
    let mut world = TileGrid::new((width, height));
    for pos in world.bounds().column_major() {
        world.set_tile(pos.x, pos.y, numbered_tile(pos.x, pos.y));
    }
    world
}

pub fn numbered_tile(x: i32, y: i32) -> Tile {
    Tile::block(((x * 7 + y * 3) % 300 + 30) as u16)
}

/// World wrapper that fails the test on any access outside the world bounds
pub struct StrictWorld(pub TileGrid);

impl StrictWorld {
    fn check(&self, x: i32, y: i32) {
        assert!(self.0.bounds().contains(x, y), "world accessed out of bounds at ({x}, {y})");
    }
}

impl World for StrictWorld {
    fn size(&self) -> Size {
        self.0.size()
    }

    fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        self.check(x, y);
        self.0.tile(x, y)
    }

    fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        self.check(x, y);
        self.0.set_tile(x, y, tile);
    }
}

/// Viewer sink remembering every invalidated area
#[derive(Default)]
pub struct RecordingViewers {
    pub areas: Vec<Rectangle>,
}

impl ViewerSink for RecordingViewers {
    fn invalidate_area(&mut self, area: Rectangle) {
        self.areas.push(area);
    }
}
