//! Compressed section files shared by clipboards, undo/redo snapshots and region saves.
//!
//! Layout (little endian, gzip wrapped):
//! ```text
//! i32 x4                header, see [`SectionHeader`]
//! Tile records          stored_width * stored_height, outer loop x, inner loop y
//! container trailer     optional, see [`read_containers`]
//! ```

mod container;
mod header;
mod reader;
mod strings;

pub use container::*;
pub use header::*;
pub use reader::*;
pub use strings::{read_string, write_string};

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
    sync::Arc,
};

use flate2::{Compression, read::GzDecoder, write::GzEncoder};

use crate::{EngineError, FrameImportance, Position, Rectangle, Result, Tile, TileGrid, World};

/// Buffer placed in front of the (de)compressor.
pub const BUFFER_SIZE: usize = 1_048_576;

pub type FileSectionReader = SectionReader<BufReader<GzDecoder<File>>>;

/// Reads and writes section files for one world's tile set.
#[derive(Clone, Debug)]
pub struct SectionFormat {
    frames: Arc<FrameImportance>,
    buffer_size: usize,
}

impl SectionFormat {
    pub fn new(frames: FrameImportance) -> Self {
        Self {
            frames: Arc::new(frames),
            buffer_size: BUFFER_SIZE,
        }
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn frames(&self) -> &FrameImportance {
        &self.frames
    }

    fn create(&self, path: &Path) -> Result<BufWriter<GzEncoder<File>>> {
        let file = File::create(path)?;
        Ok(BufWriter::with_capacity(self.buffer_size, GzEncoder::new(file, Compression::default())))
    }

    fn finish(writer: BufWriter<GzEncoder<File>>) -> Result<()> {
        let encoder = writer.into_inner().map_err(|err| err.into_error())?;
        encoder.finish()?.flush()?;
        Ok(())
    }

    /// Snapshots `area` of the world into a region-convention section at `path`.
    ///
    /// Cells outside the world, or that the world reports as absent, are stored as empty tiles.
    /// When `containers` is given a container trailer with offsets relative to the origin follows.
    pub fn write_section(&self, path: &Path, area: Rectangle, world: &dyn World, containers: Option<&[Container]>) -> Result<()> {
        let mut writer = self.create(path)?;
        self.write_section_to(&mut writer, area, world, containers)?;
        Self::finish(writer)?;
        log::debug!("wrote section {} to {}", area, path.display());
        Ok(())
    }

    /// Same as [`Self::write_section`] but into an arbitrary uncompressed sink.
    pub fn write_section_to<W: Write + ?Sized>(&self, writer: &mut W, area: Rectangle, world: &dyn World, containers: Option<&[Container]>) -> Result<()> {
        let area = Rectangle::new(area.start, area.size.max_zero());
        SectionHeader::Region(RegionHeader::from_rect(area)).write(writer)?;

        let bounds = world.bounds();
        for pos in area.column_major() {
            let tile = if bounds.contains_pt(pos) {
                world.tile(pos.x, pos.y).unwrap_or_default()
            } else {
                Tile::default()
            };
            tile.write(writer, &self.frames)?;
        }

        if let Some(containers) = containers {
            write_containers(writer, containers, area.start)?;
        }
        Ok(())
    }

    /// Writes a grid under an explicit header. The grid must match the header's stored size.
    pub fn write_grid(&self, path: &Path, header: SectionHeader, grid: &TileGrid) -> Result<()> {
        if header.stored_size() != grid.size() {
            return Err(EngineError::generic(format!(
                "grid size {} does not match header size {}",
                grid.size(),
                header.stored_size()
            )));
        }
        let mut writer = self.create(path)?;
        header.write(&mut writer)?;
        for tile in grid.tiles() {
            tile.write(&mut writer, &self.frames)?;
        }
        Self::finish(writer)
    }

    /// Opens a section for streaming.
    ///
    /// # Errors
    ///
    /// `NotFound` if there is no file at `path`, `CorruptHeader` for negative sizes.
    pub fn read_section(&self, path: &Path, convention: HeaderConvention) -> Result<FileSectionReader> {
        let file = File::open(path).map_err(|err| EngineError::from_open(err, path))?;
        let reader = BufReader::with_capacity(self.buffer_size, GzDecoder::new(file));
        SectionReader::new(reader, convention, self.frames.clone())
    }

    /// Reads only the header of a section file.
    pub fn read_header(&self, path: &Path, convention: HeaderConvention) -> Result<SectionHeader> {
        Ok(self.read_section(path, convention)?.header())
    }

    /// Decodes a complete section into memory.
    pub fn load_grid(&self, path: &Path, convention: HeaderConvention) -> Result<(SectionHeader, TileGrid)> {
        let reader = self.read_section(path, convention)?;
        let header = reader.header();
        Ok((header, reader.into_grid()?))
    }
}

/// Writes a loaded section back into the world at `origin`, skipping cells outside the world.
///
/// Returns the area that was touched.
pub fn place_grid(world: &mut dyn World, grid: &TileGrid, origin: Position) -> Rectangle {
    let target = Rectangle::new(origin, grid.size());
    let clipped = target.intersect(&world.bounds());
    for pos in clipped.column_major() {
        if let Some(tile) = grid.tile(pos.x - origin.x, pos.y - origin.y) {
            world.set_tile(pos.x, pos.y, tile);
        }
    }
    clipped
}
