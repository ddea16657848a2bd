//! Length prefixed strings: a 7-bit varint byte count followed by UTF-8.

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::{EngineError, Result};

// 5 varint bytes cover the full 32 bit length range
const MAX_LENGTH_BYTES: usize = 5;

pub fn read_string<R: Read + ?Sized>(reader: &mut R) -> Result<String> {
    let mut len: u32 = 0;
    let mut shift = 0;
    for i in 0..MAX_LENGTH_BYTES {
        let byte = reader.read_u8()?;
        len |= u32::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        if i == MAX_LENGTH_BYTES - 1 {
            return Err(EngineError::InvalidString {
                message: "length prefix too long".to_string(),
            });
        }
        shift += 7;
    }

    // grow with the data actually present, the prefix may claim up to 4 GiB
    let mut bytes = Vec::new();
    (&mut *reader).take(u64::from(len)).read_to_end(&mut bytes)?;
    if bytes.len() != len as usize {
        return Err(EngineError::TruncatedInput);
    }
    String::from_utf8(bytes).map_err(|err| EngineError::InvalidString { message: err.to_string() })
}

pub fn write_string<W: Write + ?Sized>(writer: &mut W, value: &str) -> Result<()> {
    let mut len = value.len() as u32;
    while len >= 0x80 {
        writer.write_u8((len as u8) | 0x80)?;
        len >>= 7;
    }
    writer.write_u8(len as u8)?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}
