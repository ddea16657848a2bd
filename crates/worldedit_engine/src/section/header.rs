use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{EngineError, Position, Rectangle, Result, Size};

/// Size of the four 32 bit header fields.
pub const HEADER_SIZE: usize = 16;

/// How the four header integers of a section file are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderConvention {
    /// Origin and true cell counts (undo, redo and region saves).
    Region,
    /// Two reserved fields and sizes stored one larger than the usable span.
    Clipboard,
}

/// Header of undo, redo and region files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionHeader {
    pub origin_x: i32,
    pub origin_y: i32,
    pub width: i32,
    pub height: i32,
}

impl RegionHeader {
    pub fn from_rect(rect: Rectangle) -> Self {
        Self {
            origin_x: rect.left(),
            origin_y: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    pub fn rect(&self) -> Rectangle {
        Rectangle::from_min_size((self.origin_x, self.origin_y), (self.width, self.height))
    }
}

/// Header as read back for a clipboard.
///
/// `stored_width`/`stored_height` are the cell counts on disk; the usable span is one less.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipboardHeader {
    pub reserved_a: i32,
    pub reserved_b: i32,
    pub stored_width: i32,
    pub stored_height: i32,
}

impl ClipboardHeader {
    /// Builds the header a clipboard of the given usable span is stored with.
    pub fn for_span(span: Size) -> Self {
        Self {
            reserved_a: 0,
            reserved_b: 0,
            stored_width: span.width + 1,
            stored_height: span.height + 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionHeader {
    Region(RegionHeader),
    Clipboard(ClipboardHeader),
}

impl SectionHeader {
    /// Reads the four integers and validates them.
    ///
    /// # Errors
    ///
    /// `CorruptHeader` if the width or height (after the clipboard correction) is negative, or if
    /// the grid would extend past the `i32` coordinate range.
    pub fn read<R: Read + ?Sized>(reader: &mut R, convention: HeaderConvention) -> Result<Self> {
        let a = reader.read_i32::<LittleEndian>()?;
        let b = reader.read_i32::<LittleEndian>()?;
        let width = reader.read_i32::<LittleEndian>()?;
        let height = reader.read_i32::<LittleEndian>()?;

        let header = match convention {
            HeaderConvention::Region => SectionHeader::Region(RegionHeader {
                origin_x: a,
                origin_y: b,
                width,
                height,
            }),
            HeaderConvention::Clipboard => SectionHeader::Clipboard(ClipboardHeader {
                reserved_a: a,
                reserved_b: b,
                stored_width: width,
                stored_height: height,
            }),
        };
        let span = header.size();
        let corrupt = EngineError::CorruptHeader {
            width: span.width,
            height: span.height,
        };
        if span.width < 0 || span.height < 0 {
            return Err(corrupt);
        }
        // the stored grid placed at the origin has to stay addressable
        let origin = header.origin();
        let stored = header.stored_size();
        if origin.x.checked_add(stored.width).is_none() || origin.y.checked_add(stored.height).is_none() {
            return Err(corrupt);
        }
        Ok(header)
    }

    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        let fields = match self {
            SectionHeader::Region(h) => [h.origin_x, h.origin_y, h.width, h.height],
            SectionHeader::Clipboard(h) => [h.reserved_a, h.reserved_b, h.stored_width, h.stored_height],
        };
        for field in fields {
            writer.write_i32::<LittleEndian>(field)?;
        }
        Ok(())
    }

    pub fn convention(&self) -> HeaderConvention {
        match self {
            SectionHeader::Region(_) => HeaderConvention::Region,
            SectionHeader::Clipboard(_) => HeaderConvention::Clipboard,
        }
    }

    /// Origin of the section; reserved clipboard fields report as the origin.
    pub fn origin(&self) -> Position {
        match self {
            SectionHeader::Region(h) => Position::new(h.origin_x, h.origin_y),
            SectionHeader::Clipboard(h) => Position::new(h.reserved_a, h.reserved_b),
        }
    }

    /// The reported size: true cell counts for regions, the usable span for clipboards.
    pub fn size(&self) -> Size {
        match self {
            SectionHeader::Region(h) => Size::new(h.width, h.height),
            SectionHeader::Clipboard(h) => Size::new(h.stored_width - 1, h.stored_height - 1),
        }
    }

    /// The dimensions of the tile grid physically present in the file.
    pub fn stored_size(&self) -> Size {
        match self {
            SectionHeader::Region(h) => Size::new(h.width, h.height),
            SectionHeader::Clipboard(h) => Size::new(h.stored_width, h.stored_height),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.stored_size().area()
    }

    /// Stored grid placed at the origin.
    pub fn rect(&self) -> Rectangle {
        Rectangle::new(self.origin(), self.stored_size())
    }
}
