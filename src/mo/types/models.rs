//! Core data structures for the catalog format.
//!
//! This module defines the parsed header, the revision word, and the
//! `(length, offset)` entries of the two string tables.

use std::fmt;

/// Magic number at offset 0 of every catalog, read little-endian.
pub const MAGIC: u32 = 0x950412de;

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 28;

/// Size of one `(length, offset)` table entry in bytes.
pub const ENTRY_LEN: usize = 8;

/// The file format revision word.
///
/// The high 16 bits carry the major revision and the low 16 bits the minor
/// revision. The reader targets revision 0; anything newer is read on a
/// best-effort basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Revision(pub u32);

impl Revision {
    pub fn major(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    pub fn minor(&self) -> u16 {
        (self.0 & 0xffff) as u16
    }

    /// Whether the revision is newer than anything this reader knows about.
    pub fn is_newer_than_supported(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

/// Complete parsed header of a catalog.
///
/// All fields are stored as found in the file. Offsets are absolute byte
/// offsets into the catalog buffer and are only validated when they are
/// dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoHeader {
    pub magic: u32,
    pub revision: Revision,
    /// Number of string pairs (N).
    pub count: u32,
    /// Offset of the original-string table (O).
    pub originals_offset: u32,
    /// Offset of the translation table (T).
    pub translations_offset: u32,
    /// Number of slots in the hash table (S). Not used for lookup.
    pub hash_size: u32,
    /// Offset of the hash table (H). Not used for lookup.
    pub hash_offset: u32,
}

impl MoHeader {
    /// Returns the start offset of the given string table.
    pub fn table_offset(&self, table: Table) -> u32 {
        match table {
            Table::Originals => self.originals_offset,
            Table::Translations => self.translations_offset,
        }
    }
}

/// One of the two parallel string tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Originals,
    Translations,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Originals => write!(f, "original"),
            Table::Translations => write!(f, "translation"),
        }
    }
}

/// A `(length, offset)` pair from a string table.
///
/// `length` excludes the NUL terminator. Retrieval relies on the terminator,
/// so `length` is carried for callers but never trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub length: u32,
    pub offset: u32,
}
