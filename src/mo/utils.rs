//! Bounds-checked byte reading utilities.
//!
//! Every multi-byte read from a catalog buffer goes through this module.
//! Each accessor validates the full read range against the slice length
//! before touching any bytes, so no input can cause an out-of-bounds read.

use byteorder::{ByteOrder, LittleEndian};

use super::types::error::{MoError, Result};

/// Returns the 4-byte range starting at `addr`, or an error if it would
/// run past the end of `data`.
fn word_at(data: &[u8], addr: usize) -> Result<&[u8]> {
    addr.checked_add(4)
        .and_then(|end| data.get(addr..end))
        .ok_or(MoError::OutOfBounds {
            offset: addr,
            len: data.len(),
        })
}

/// Read a little-endian `u32` at byte offset `addr`.
pub fn read_u32_at(data: &[u8], addr: usize) -> Result<u32> {
    Ok(LittleEndian::read_u32(word_at(data, addr)?))
}

/// Read a little-endian `i32` at byte offset `addr`.
pub fn read_i32_at(data: &[u8], addr: usize) -> Result<i32> {
    Ok(LittleEndian::read_i32(word_at(data, addr)?))
}

/// Returns the NUL-terminated byte string starting at `offset`, without
/// the terminator.
///
/// Fails if `offset` is past the end of `data` or no NUL byte follows it.
pub fn cstr_at(data: &[u8], offset: usize) -> Result<&[u8]> {
    let tail = data.get(offset..).ok_or(MoError::OutOfBounds {
        offset,
        len: data.len(),
    })?;
    let end = tail
        .iter()
        .position(|&b| b == 0)
        .ok_or(MoError::UnterminatedString { offset })?;
    Ok(&tail[..end])
}
