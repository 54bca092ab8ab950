use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use log::{info, trace, warn};

use super::format::{header, table};
use super::iter::Entries;
use super::types::error::Result;
use super::types::models::{MoHeader, Table, TableEntry};

/// The main reader for compiled message catalogs.
///
/// A reader is either unopened (no buffer, zero strings) or opened, holding
/// the complete file contents and its parsed header. All lookups are
/// bounds-checked computations over the in-memory buffer; strings are
/// returned as borrowed byte slices without their NUL terminator.
///
/// Strings are opaque bytes. No text decoding is performed.
#[derive(Debug, Default)]
pub struct CatalogReader {
    data: Vec<u8>,
    header: Option<MoHeader>,
}

impl CatalogReader {
    /// Creates an unopened reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a catalog from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be read
    /// - File is shorter than the 28-byte header
    /// - Magic number does not match
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening catalog: {}", path.display());
        let data = fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Takes ownership of an in-memory catalog and validates its header.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let header = header::parse(&data)?;
        info!(
            "Catalog opened: {} strings, revision {}, {} bytes",
            header.count,
            header.revision,
            data.len()
        );
        Ok(Self {
            data,
            header: Some(header),
        })
    }

    /// Loads the catalog at `path`, replacing whatever was loaded before.
    ///
    /// The previous buffer is released before the new file is read. On
    /// failure the reader is left unopened, holding zero strings.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        *self = Self::default();
        *self = Self::from_path(path)?;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.header.is_some()
    }

    /// The parsed header, if the reader is open.
    pub fn header(&self) -> Option<&MoHeader> {
        self.header.as_ref()
    }

    /// Number of string pairs. Zero when unopened.
    pub fn len(&self) -> usize {
        self.header.map_or(0, |h| h.count as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the original string at `index`.
    ///
    /// Returns `None` if `index >= len()` or the entry points outside the
    /// buffer.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.string(Table::Originals, index)
    }

    /// Returns the translation at `index`.
    pub fn get_translated(&self, index: usize) -> Option<&[u8]> {
        self.string(Table::Translations, index)
    }

    /// Returns the raw `(length, offset)` entry for the original at `index`.
    pub fn original_entry(&self, index: usize) -> Option<TableEntry> {
        self.entry(Table::Originals, index)
    }

    /// Returns the raw `(length, offset)` entry for the translation at `index`.
    pub fn translation_entry(&self, index: usize) -> Option<TableEntry> {
        self.entry(Table::Translations, index)
    }

    /// Finds the index of `query` among the original strings.
    ///
    /// Binary search over `[0, len() - 1]` with a truncating midpoint. The
    /// originals table must be sorted byte-wise; on an unsorted table the
    /// result is unspecified but still memory-safe. A string that cannot be
    /// retrieved ends the search with `None`.
    pub fn index_of(&self, query: &[u8]) -> Option<usize> {
        let mut low: i64 = 0;
        let mut high: i64 = self.len() as i64 - 1;

        while low <= high {
            let mid = (low + high) / 2;
            let candidate = self.get(mid as usize)?;
            trace!("index_of: probing [{}, {}] at {}", low, high, mid);

            match query.cmp(candidate) {
                Ordering::Less => high = mid - 1,
                Ordering::Greater => low = mid + 1,
                Ordering::Equal => return Some(mid as usize),
            }
        }

        None
    }

    /// Returns the translation of `query`, or `query` itself when the
    /// catalog has no entry for it.
    pub fn translate<'a>(&'a self, query: &'a [u8]) -> &'a [u8] {
        let Some(index) = self.index_of(query) else {
            return query;
        };
        match self.get_translated(index) {
            Some(translation) => translation,
            None => {
                warn!("Translation {} could not be read; echoing the original", index);
                query
            }
        }
    }

    /// Returns an iterator over `(original, translation)` pairs in table order.
    pub fn iter(&self) -> Entries<'_> {
        Entries::new(self)
    }

    /// Checks that the originals are in ascending byte-wise order.
    ///
    /// Lookup assumes this without checking it. Unreadable entries make the
    /// table count as unsorted.
    pub fn is_sorted(&self) -> bool {
        let mut previous: Option<&[u8]> = None;
        for index in 0..self.len() {
            let Some(current) = self.get(index) else {
                return false;
            };
            if previous.is_some_and(|p| p > current) {
                warn!("Originals out of order at index {}", index);
                return false;
            }
            previous = Some(current);
        }
        true
    }

    fn entry(&self, table: Table, index: usize) -> Option<TableEntry> {
        let header = self.header.as_ref()?;
        table::entry(&self.data, header, table, index)
            .inspect_err(|e| trace!("No {} entry {}: {}", table, index, e))
            .ok()
    }

    fn string(&self, table: Table, index: usize) -> Option<&[u8]> {
        let header = self.header.as_ref()?;
        table::string(&self.data, header, table, index)
            .inspect_err(|e| trace!("No {} string {}: {}", table, index, e))
            .ok()
    }
}

impl<'a> IntoIterator for &'a CatalogReader {
    type Item = (&'a [u8], &'a [u8]);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
