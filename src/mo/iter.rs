//! Sequential access to catalog entries.
//!
//! # Example
//! ```no_run
//! # use mo_reader::CatalogReader;
//! # let reader = CatalogReader::from_path("messages.mo").unwrap();
//! for (original, translation) in reader.iter() {
//!     println!(
//!         "{} => {}",
//!         String::from_utf8_lossy(original),
//!         String::from_utf8_lossy(translation)
//!     );
//! }
//! ```

use super::reader::CatalogReader;

/// Iterator over `(original, translation)` pairs in table order.
///
/// Iteration ends at the first pair that cannot be read from the buffer.
///
/// Created by [`CatalogReader::iter()`](crate::CatalogReader::iter).
pub struct Entries<'a> {
    reader: &'a CatalogReader,
    index: usize,
}

impl<'a> Entries<'a> {
    pub(super) fn new(reader: &'a CatalogReader) -> Self {
        Self { reader, index: 0 }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.reader.len() {
            return None;
        }
        let original = self.reader.get(self.index)?;
        let translation = self.reader.get_translated(self.index)?;
        self.index += 1;
        Some((original, translation))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.reader.len().saturating_sub(self.index)))
    }
}
