//! String table resolution.
//!
//! Both tables hold `N` entries of two little-endian `u32`s each: the string
//! length, then the absolute offset of the NUL-terminated string.

use crate::mo::types::{
    error::{MoError, Result},
    models::{ENTRY_LEN, MoHeader, Table, TableEntry},
};
use crate::mo::utils;

/// Reads entry `index` of the given table.
///
/// # Errors
/// - [`MoError::IndexOutOfRange`] if `index >= header.count`
/// - [`MoError::OutOfBounds`] if the entry lies outside `data`
pub fn entry(data: &[u8], header: &MoHeader, table: Table, index: usize) -> Result<TableEntry> {
    let count = header.count as usize;
    if index >= count {
        return Err(MoError::IndexOutOfRange { index, count });
    }

    let addr = index
        .checked_mul(ENTRY_LEN)
        .and_then(|rel| rel.checked_add(header.table_offset(table) as usize))
        .ok_or(MoError::OutOfBounds {
            offset: usize::MAX,
            len: data.len(),
        })?;

    // The offset field sits after the length field; reading it first
    // bounds-checks the whole entry.
    let offset = utils::read_u32_at(data, addr.saturating_add(4))?;
    let length = utils::read_u32_at(data, addr)?;

    Ok(TableEntry { length, offset })
}

/// Returns the string referenced by entry `index` of the given table,
/// bounded by its NUL terminator.
pub fn string<'a>(data: &'a [u8], header: &MoHeader, table: Table, index: usize) -> Result<&'a [u8]> {
    let entry = entry(data, header, table, index)?;
    utils::cstr_at(data, entry.offset as usize)
}
