use std::io::{Read, Write};

use bitflags::bitflags;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{FrameImportance, Result};

bitflags! {
    /// 16 bit tile header. Multi-bit fields (`COLOR`, `SLOPE`) are masks.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TileFlags: u16 {
        const COLOR      = 0x001F;
        const ACTIVE     = 0x0020;
        const INACTIVE   = 0x0040;
        const WIRE       = 0x0080;
        const WIRE2      = 0x0100;
        const WIRE3      = 0x0200;
        const HALF_BRICK = 0x0400;
        const ACTUATOR   = 0x0800;
        const SLOPE      = 0x7000;
    }
}

bitflags! {
    /// First 8 bit header: wall paint, liquid kind and the fourth wire.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WallFlags: u8 {
        const WALL_COLOR = 0x1F;
        const LAVA       = 0x20;
        const HONEY      = 0x40;
        const WIRE4      = 0x80;
    }
}

const SLOPE_SHIFT: u16 = 12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LiquidKind {
    #[default]
    Water,
    Lava,
    Honey,
}

/// A single world cell as stored in section files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    pub flags: TileFlags,
    pub wall_flags: WallFlags,
    /// Second 8 bit header (frame numbers), kept opaque.
    pub frame_bits: u8,
    pub tile_type: u16,
    pub frame_x: i16,
    pub frame_y: i16,
    pub wall: u8,
    pub liquid: u8,
}

impl Tile {
    /// An active block of the given type.
    pub fn block(tile_type: u16) -> Self {
        Tile {
            flags: TileFlags::ACTIVE,
            tile_type,
            ..Default::default()
        }
    }

    pub fn with_frame(mut self, frame_x: i16, frame_y: i16) -> Self {
        self.frame_x = frame_x;
        self.frame_y = frame_y;
        self
    }

    pub fn with_wall(mut self, wall: u8) -> Self {
        self.wall = wall;
        self
    }

    pub fn with_liquid(mut self, kind: LiquidKind, amount: u8) -> Self {
        self.set_liquid_kind(kind);
        self.liquid = amount;
        self
    }

    pub fn is_active(&self) -> bool {
        self.flags.contains(TileFlags::ACTIVE)
    }

    pub fn set_active(&mut self, active: bool) {
        self.flags.set(TileFlags::ACTIVE, active);
    }

    pub fn is_inactive(&self) -> bool {
        self.flags.contains(TileFlags::INACTIVE)
    }

    pub fn half_brick(&self) -> bool {
        self.flags.contains(TileFlags::HALF_BRICK)
    }

    pub fn has_actuator(&self) -> bool {
        self.flags.contains(TileFlags::ACTUATOR)
    }

    /// Wires 1 to 4 as a bit set.
    pub fn wires(&self) -> u8 {
        let mut wires = 0;
        if self.flags.contains(TileFlags::WIRE) {
            wires |= 1;
        }
        if self.flags.contains(TileFlags::WIRE2) {
            wires |= 2;
        }
        if self.flags.contains(TileFlags::WIRE3) {
            wires |= 4;
        }
        if self.wall_flags.contains(WallFlags::WIRE4) {
            wires |= 8;
        }
        wires
    }

    pub fn color(&self) -> u8 {
        (self.flags.bits() & TileFlags::COLOR.bits()) as u8
    }

    pub fn set_color(&mut self, color: u8) {
        let bits = (self.flags.bits() & !TileFlags::COLOR.bits()) | (u16::from(color) & TileFlags::COLOR.bits());
        self.flags = TileFlags::from_bits_retain(bits);
    }

    pub fn slope(&self) -> u8 {
        ((self.flags.bits() & TileFlags::SLOPE.bits()) >> SLOPE_SHIFT) as u8
    }

    pub fn set_slope(&mut self, slope: u8) {
        let bits = (self.flags.bits() & !TileFlags::SLOPE.bits()) | ((u16::from(slope) << SLOPE_SHIFT) & TileFlags::SLOPE.bits());
        self.flags = TileFlags::from_bits_retain(bits);
    }

    pub fn wall_color(&self) -> u8 {
        self.wall_flags.bits() & WallFlags::WALL_COLOR.bits()
    }

    pub fn liquid_kind(&self) -> LiquidKind {
        if self.wall_flags.contains(WallFlags::HONEY) {
            LiquidKind::Honey
        } else if self.wall_flags.contains(WallFlags::LAVA) {
            LiquidKind::Lava
        } else {
            LiquidKind::Water
        }
    }

    pub fn set_liquid_kind(&mut self, kind: LiquidKind) {
        self.wall_flags.remove(WallFlags::LAVA | WallFlags::HONEY);
        match kind {
            LiquidKind::Water => {}
            LiquidKind::Lava => self.wall_flags.insert(WallFlags::LAVA),
            LiquidKind::Honey => self.wall_flags.insert(WallFlags::HONEY),
        }
    }

    /// True if the record carries frame coordinates on the wire.
    pub fn has_frame(&self, frames: &FrameImportance) -> bool {
        self.is_active() && frames.is_frame_important(self.tile_type)
    }

    /// Decodes one variable length tile record.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedInput` if the stream ends inside the record.
    pub fn read<R: Read + ?Sized>(reader: &mut R, frames: &FrameImportance) -> Result<Tile> {
        let mut tile = Tile {
            flags: TileFlags::from_bits_retain(reader.read_u16::<LittleEndian>()?),
            wall_flags: WallFlags::from_bits_retain(reader.read_u8()?),
            frame_bits: reader.read_u8()?,
            ..Default::default()
        };

        if tile.is_active() {
            tile.tile_type = reader.read_u16::<LittleEndian>()?;
            if frames.is_frame_important(tile.tile_type) {
                tile.frame_x = reader.read_i16::<LittleEndian>()?;
                tile.frame_y = reader.read_i16::<LittleEndian>()?;
            }
        }
        tile.wall = reader.read_u8()?;
        tile.liquid = reader.read_u8()?;
        Ok(tile)
    }

    /// Encodes the tile. Type and frame fields are only emitted when the headers call for them.
    pub fn write<W: Write + ?Sized>(&self, writer: &mut W, frames: &FrameImportance) -> Result<()> {
        writer.write_u16::<LittleEndian>(self.flags.bits())?;
        writer.write_u8(self.wall_flags.bits())?;
        writer.write_u8(self.frame_bits)?;

        if self.is_active() {
            writer.write_u16::<LittleEndian>(self.tile_type)?;
            if frames.is_frame_important(self.tile_type) {
                writer.write_i16::<LittleEndian>(self.frame_x)?;
                writer.write_i16::<LittleEndian>(self.frame_y)?;
            }
        }
        writer.write_u8(self.wall)?;
        writer.write_u8(self.liquid)?;
        Ok(())
    }

    /// Size of the encoded record in bytes.
    pub fn encoded_len(&self, frames: &FrameImportance) -> usize {
        let mut len = 6;
        if self.is_active() {
            len += 2;
            if frames.is_frame_important(self.tile_type) {
                len += 4;
            }
        }
        len
    }
}
