use std::{io::Read, sync::Arc};

use super::{Container, HeaderConvention, SectionHeader, read_containers};
use crate::{EngineError, FrameImportance, Position, Result, Tile, TileGrid};

/// Forward-only tile stream over an opened section.
///
/// Yields exactly `header().cell_count()` tiles in column-major order. The stream cannot be
/// rewound; open the file again to start over.
pub struct SectionReader<R: Read> {
    reader: R,
    header: SectionHeader,
    remaining: usize,
    frames: Arc<FrameImportance>,
    failed: bool,
}

impl<R: Read> SectionReader<R> {
    /// Reads and validates the header from an uncompressed stream.
    pub fn new(mut reader: R, convention: HeaderConvention, frames: Arc<FrameImportance>) -> Result<Self> {
        let header = SectionHeader::read(&mut reader, convention)?;
        Ok(Self {
            reader,
            header,
            remaining: header.cell_count(),
            frames,
            failed: false,
        })
    }

    pub fn header(&self) -> SectionHeader {
        self.header
    }

    /// Tiles not yet read.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Reads the container trailer. All tiles have to be consumed first.
    ///
    /// Container positions are translated by `offset`.
    pub fn read_containers(&mut self, offset: Position) -> Result<Vec<Container>> {
        if self.remaining > 0 {
            return Err(EngineError::TilesPending { remaining: self.remaining });
        }
        read_containers(&mut self.reader, offset)
    }

    /// Collects the remaining tiles into a grid of the stored size.
    pub fn into_grid(mut self) -> Result<TileGrid> {
        let size = self.header.stored_size();
        let tiles = self.by_ref().collect::<Result<Vec<Tile>>>()?;
        Ok(TileGrid::from_tiles(size, tiles))
    }

    /// Decodes every tile and then the trailer.
    pub fn into_grid_with_containers(mut self, offset: Position) -> Result<(TileGrid, Vec<Container>)> {
        let size = self.header.stored_size();
        let tiles = self.by_ref().collect::<Result<Vec<Tile>>>()?;
        let containers = self.read_containers(offset)?;
        Ok((TileGrid::from_tiles(size, tiles), containers))
    }
}

impl<R: Read> Iterator for SectionReader<R> {
    type Item = Result<Tile>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.failed {
            return None;
        }
        match Tile::read(&mut self.reader, &self.frames) {
            Ok(tile) => {
                self.remaining -= 1;
                Some(Ok(tile))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed { (0, Some(0)) } else { (0, Some(self.remaining)) }
    }
}
