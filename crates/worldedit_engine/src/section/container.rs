//! Container (chest) trailer appended to region sections.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::strings::{read_string, write_string};
use crate::{MAX_CONTAINERS, Position, Result};

/// Slots serialized per container.
pub const CONTAINER_SLOTS: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemStack {
    pub stack: i16,
    pub net_id: i16,
    pub prefix: u8,
}

impl ItemStack {
    pub fn new(net_id: i16, stack: i16, prefix: u8) -> Self {
        Self { stack, net_id, prefix }
    }

    pub fn is_empty(&self) -> bool {
        self.stack == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Container {
    /// Absolute world position when owned by a world, relative offset inside a trailer.
    pub position: Position,
    pub name: String,
    pub items: Vec<ItemStack>,
}

impl Container {
    pub fn new(position: impl Into<Position>, name: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            name: name.into(),
            items: vec![ItemStack::default(); CONTAINER_SLOTS],
        }
    }

    pub fn with_item(mut self, slot: usize, item: ItemStack) -> Self {
        if slot >= self.items.len() {
            self.items.resize(slot + 1, ItemStack::default());
        }
        self.items[slot] = item;
        self
    }
}

fn read_item<R: Read + ?Sized>(reader: &mut R) -> Result<ItemStack> {
    let stack = reader.read_i16::<LittleEndian>()?;
    if stack == 0 {
        return Ok(ItemStack::default());
    }
    let net_id = reader.read_i16::<LittleEndian>()?;
    let prefix = reader.read_u8()?;
    // negative stacks are stored for single items
    let stack = if stack < 0 { 1 } else { stack };
    Ok(ItemStack { stack, net_id, prefix })
}

/// Reads a trailer, translating stored offsets by `origin`.
///
/// End of stream before the container count means there is no trailer.
pub fn read_containers<R: Read + ?Sized>(reader: &mut R, origin: Position) -> Result<Vec<Container>> {
    let count = match reader.read_i32::<LittleEndian>() {
        Ok(count) => count,
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    let slots = reader.read_i16::<LittleEndian>()?.max(0) as usize;
    let kept = slots.min(CONTAINER_SLOTS);
    log::debug!("reading {} containers with {} slots", count, slots);

    // count is untrusted
    let mut containers = Vec::with_capacity((count.max(0) as usize).min(MAX_CONTAINERS));
    for _ in 0..count.max(0) {
        let x = reader.read_i32::<LittleEndian>()?;
        let y = reader.read_i32::<LittleEndian>()?;
        let name = read_string(reader)?;
        let mut items = Vec::with_capacity(kept);
        for _ in 0..kept {
            items.push(read_item(reader)?);
        }
        for _ in kept..slots {
            read_item(reader)?;
        }
        containers.push(Container {
            position: origin + Position::new(x, y),
            name,
            items,
        });
    }
    Ok(containers)
}

/// Writes a trailer with positions stored relative to `origin`.
pub fn write_containers<W: Write + ?Sized>(writer: &mut W, containers: &[Container], origin: Position) -> Result<()> {
    writer.write_i32::<LittleEndian>(containers.len() as i32)?;
    writer.write_i16::<LittleEndian>(CONTAINER_SLOTS as i16)?;
    for container in containers {
        let offset = container.position - origin;
        writer.write_i32::<LittleEndian>(offset.x)?;
        writer.write_i32::<LittleEndian>(offset.y)?;
        write_string(writer, &container.name)?;
        for slot in 0..CONTAINER_SLOTS {
            let item = container.items.get(slot).copied().unwrap_or_default();
            let stack = if item.stack < 0 { 1 } else { item.stack };
            writer.write_i16::<LittleEndian>(stack)?;
            if stack > 0 {
                writer.write_i16::<LittleEndian>(item.net_id)?;
                writer.write_u8(item.prefix)?;
            }
        }
    }
    Ok(())
}
