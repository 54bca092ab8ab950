//! Synthetic catalog fixtures shared by the integration tests.
#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const MAGIC: u32 = 0x950412de;

/// Builds little-endian catalogs laid out the way `msgfmt` writes them:
/// header, originals table, translations table, hash table, strings.
pub struct CatalogBuilder {
    pairs: Vec<(Vec<u8>, Vec<u8>)>,
    revision: u32,
    hash_size: u32,
    sorted: bool,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            pairs: Vec::new(),
            revision: 0,
            hash_size: 7,
            sorted: true,
        }
    }

    pub fn pair(mut self, original: impl AsRef<[u8]>, translation: impl AsRef<[u8]>) -> Self {
        self.pairs
            .push((original.as_ref().to_vec(), translation.as_ref().to_vec()));
        self
    }

    pub fn pairs<O, T>(mut self, pairs: impl IntoIterator<Item = (O, T)>) -> Self
    where
        O: AsRef<[u8]>,
        T: AsRef<[u8]>,
    {
        for (o, t) in pairs {
            self = self.pair(o, t);
        }
        self
    }

    pub fn revision(mut self, revision: u32) -> Self {
        self.revision = revision;
        self
    }

    pub fn hash_size(mut self, hash_size: u32) -> Self {
        self.hash_size = hash_size;
        self
    }

    /// Keeps pairs in insertion order instead of sorting by original.
    pub fn unsorted(mut self) -> Self {
        self.sorted = false;
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        if self.sorted {
            self.pairs.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let n = self.pairs.len() as u32;
        let originals_offset = 28u32;
        let translations_offset = originals_offset + 8 * n;
        let hash_offset = translations_offset + 8 * n;
        let strings_offset = hash_offset + 4 * self.hash_size;

        let mut strings = Vec::new();
        let mut originals = Vec::new();
        let mut translations = Vec::new();
        for (original, _) in &self.pairs {
            originals.push((original.len() as u32, strings_offset + strings.len() as u32));
            strings.extend_from_slice(original);
            strings.push(0);
        }
        for (_, translation) in &self.pairs {
            translations.push((translation.len() as u32, strings_offset + strings.len() as u32));
            strings.extend_from_slice(translation);
            strings.push(0);
        }

        let mut out = Vec::new();
        for word in [
            MAGIC,
            self.revision,
            n,
            originals_offset,
            translations_offset,
            self.hash_size,
            hash_offset,
        ] {
            out.extend_from_slice(&word.to_le_bytes());
        }
        for (length, offset) in originals.iter().chain(translations.iter()) {
            out.extend_from_slice(&length.to_le_bytes());
            out.extend_from_slice(&offset.to_le_bytes());
        }
        out.resize(strings_offset as usize, 0);
        out.extend_from_slice(&strings);
        out
    }
}

/// The three-entry Spanish fruit catalog.
pub fn fruit_catalog() -> Vec<u8> {
    CatalogBuilder::new()
        .pair("banana", "plátano")
        .pair("cherry", "cereza")
        .pair("apple", "manzana")
        .build()
}

/// Writes `bytes` to a fresh temporary file.
pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Overwrites the little-endian `u32` at `offset`.
pub fn patch_u32(bytes: &mut [u8], offset: usize, value: u32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}
