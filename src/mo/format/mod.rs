//! File format parsing layer for compiled message catalogs.
//!
//! This module interprets the raw catalog buffer for the high-level
//! [`CatalogReader`](crate::mo::reader::CatalogReader).
//!
//! # Module Organization
//!
//! - [`header`]: Parses and validates the fixed 28-byte header
//! - [`table`]: Resolves `(length, offset)` entries and the strings they point to
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌──────────────────────┐
//! │  Header (28 bytes)   │ ← header::parse()
//! ├──────────────────────┤
//! │  Originals table     │ ← table::entry(Table::Originals, i)
//! │  N × (len, offset)   │
//! ├──────────────────────┤
//! │  Translations table  │ ← table::entry(Table::Translations, i)
//! │  N × (len, offset)   │
//! ├──────────────────────┤
//! │  Hash table (unused) │
//! ├──────────────────────┤
//! │  NUL-terminated      │ ← table::string()
//! │  strings             │
//! └──────────────────────┘
//! ```

pub mod header;
pub mod table;
