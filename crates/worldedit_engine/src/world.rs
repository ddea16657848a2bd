use crate::{Container, Position, Rectangle, Size, Tile};

/// Maximum number of containers a world can hold.
pub const MAX_CONTAINERS: usize = 1000;

/// Read/write access to a live tile world.
///
/// Coordinates passed in by this crate are always inside `bounds()`.
pub trait World {
    fn size(&self) -> Size;

    fn tile(&self, x: i32, y: i32) -> Option<Tile>;

    fn set_tile(&mut self, x: i32, y: i32, tile: Tile);

    fn bounds(&self) -> Rectangle {
        Rectangle::from_min_size((0, 0), self.size())
    }

    /// Containers whose position lies inside `area`.
    fn containers_in(&self, _area: Rectangle) -> Vec<Container> {
        Vec::new()
    }

    /// Stores a container in the first free slot. Returns false if the world is full.
    fn place_container(&mut self, _container: Container) -> bool {
        false
    }
}

/// A column-major in-memory tile grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileGrid {
    size: Size,
    tiles: Vec<Tile>,
    containers: Vec<Container>,
}

impl TileGrid {
    pub fn new(size: impl Into<Size>) -> Self {
        let size = size.into();
        Self {
            size,
            tiles: vec![Tile::default(); size.area()],
            containers: Vec::new(),
        }
    }

    /// Builds a grid from tiles in column-major order; missing cells stay empty.
    pub fn from_tiles(size: impl Into<Size>, tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut grid = Self::new(size);
        for (slot, tile) in grid.tiles.iter_mut().zip(tiles) {
            *slot = tile;
        }
        grid
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(x as usize * self.size.height as usize + y as usize)
    }

    /// Tiles in column-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn fill(&mut self, area: Rectangle, tile: Tile) {
        for pos in area.intersect(&self.bounds()).column_major() {
            self.set_tile(pos.x, pos.y, tile);
        }
    }

    /// Mirrors the grid horizontally and/or vertically. Containers move with their cells.
    pub fn flip(&self, horizontal: bool, vertical: bool) -> TileGrid {
        let map = |pos: Position| {
            Position::new(
                if horizontal { self.size.width - 1 - pos.x } else { pos.x },
                if vertical { self.size.height - 1 - pos.y } else { pos.y },
            )
        };
        self.remap(self.size, map)
    }

    /// Rotates clockwise by a multiple of 90 degrees. Containers move with their cells.
    pub fn rotate_quarters(&self, quarters: u8) -> TileGrid {
        let quarters = quarters % 4;
        let size = if quarters % 2 == 1 {
            Size::new(self.size.height, self.size.width)
        } else {
            self.size
        };
        let map = |Position { x, y }: Position| match quarters {
            0 => Position::new(x, y),
            1 => Position::new(self.size.height - 1 - y, x),
            2 => Position::new(self.size.width - 1 - x, self.size.height - 1 - y),
            _ => Position::new(y, self.size.width - 1 - x),
        };
        self.remap(size, map)
    }

    fn remap(&self, size: Size, map: impl Fn(Position) -> Position) -> TileGrid {
        let mut result = TileGrid::new(size);
        for pos in self.bounds().column_major() {
            if let Some(tile) = self.tile(pos.x, pos.y) {
                let target = map(pos);
                result.set_tile(target.x, target.y, tile);
            }
        }
        result.containers = self
            .containers
            .iter()
            .map(|container| Container {
                position: map(container.position),
                ..container.clone()
            })
            .collect();
        result
    }
}

impl World for TileGrid {
    fn size(&self) -> Size {
        self.size
    }

    fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(idx) = self.index(x, y) {
            self.tiles[idx] = tile;
        } else {
            log::error!("set_tile outside grid at ({}, {})", x, y);
        }
    }

    fn containers_in(&self, area: Rectangle) -> Vec<Container> {
        self.containers.iter().filter(|c| area.contains_pt(c.position)).cloned().collect()
    }

    fn place_container(&mut self, container: Container) -> bool {
        if self.containers.len() >= MAX_CONTAINERS {
            return false;
        }
        self.containers.push(container);
        true
    }
}
