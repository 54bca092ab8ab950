//! Catalog header parsing and validation.

use log::{debug, trace, warn};

use crate::mo::types::{
    error::{MoError, Result},
    models::{HEADER_LEN, MAGIC, MoHeader, Revision},
};
use crate::mo::utils;

/// Parses the fixed header at the start of a catalog buffer.
///
/// # Header Structure
/// ```text
/// [ 0] magic               u32 LE, must be 0x950412de
/// [ 4] revision            u32 LE
/// [ 8] number of strings   u32 LE  (N)
/// [12] originals table     u32 LE  (O)
/// [16] translations table  u32 LE  (T)
/// [20] hash table size     u32 LE  (S)
/// [24] hash table offset   u32 LE  (H)
/// ```
///
/// A revision newer than 0 is accepted with a warning.
///
/// # Errors
/// - [`MoError::TruncatedHeader`] if `data` is shorter than 28 bytes
/// - [`MoError::InvalidMagic`] if the magic number does not match
pub fn parse(data: &[u8]) -> Result<MoHeader> {
    trace!("Parsing catalog header from {} bytes", data.len());

    if data.len() < HEADER_LEN {
        return Err(MoError::TruncatedHeader { len: data.len() });
    }

    let magic = utils::read_u32_at(data, 0)?;
    if magic != MAGIC {
        return Err(MoError::InvalidMagic { found: magic });
    }

    let revision = Revision(utils::read_u32_at(data, 4)?);
    if revision.is_newer_than_supported() {
        warn!(
            "Catalog revision {} is newer than 0.0; lookups may not work correctly",
            revision
        );
    }

    let header = MoHeader {
        magic,
        revision,
        count: utils::read_u32_at(data, 8)?,
        originals_offset: utils::read_u32_at(data, 12)?,
        translations_offset: utils::read_u32_at(data, 16)?,
        hash_size: utils::read_u32_at(data, 20)?,
        hash_offset: utils::read_u32_at(data, 24)?,
    };

    debug!(
        "Header: revision={}, N={}, O={:#x}, T={:#x}, S={}, H={:#x}",
        header.revision,
        header.count,
        header.originals_offset,
        header.translations_offset,
        header.hash_size,
        header.hash_offset
    );

    Ok(header)
}
