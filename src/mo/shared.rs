//! A catalog reader that can be shared between threads.

use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard};
use log::info;

use super::reader::CatalogReader;
use super::types::error::{MoError, Result};

/// A cloneable handle to a [`CatalogReader`] behind a read-write lock.
///
/// Lookups take the read lock and may run concurrently. Reopening takes the
/// write lock, so it waits for in-flight lookups and blocks new ones until
/// the buffer has been replaced. Lookup results are returned as owned copies
/// because the buffer may be replaced once the lock is released.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<CatalogReader>>,
}

impl SharedCatalog {
    /// Creates a handle holding an unopened reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the catalog at `path` and wraps it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from(CatalogReader::from_path(path)?))
    }

    /// Replaces the shared catalog with the one at `path`.
    ///
    /// The file is read and validated before the write lock is taken. On
    /// failure the shared reader is left unopened, as with
    /// [`CatalogReader::open`].
    pub fn reopen(&self, path: impl AsRef<Path>) -> Result<()> {
        let loaded = CatalogReader::from_path(path);
        let mut guard = self.inner.write().map_err(|_| MoError::LockPoisoned)?;
        match loaded {
            Ok(reader) => {
                *guard = reader;
                info!("Shared catalog replaced: {} strings", guard.len());
                Ok(())
            }
            Err(e) => {
                *guard = CatalogReader::default();
                Err(e)
            }
        }
    }

    /// Takes the read lock for borrowing lookups without copying.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, CatalogReader>> {
        self.inner.read().map_err(|_| MoError::LockPoisoned)
    }

    pub fn is_open(&self) -> Result<bool> {
        Ok(self.read()?.is_open())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn get(&self, index: usize) -> Result<Option<Vec<u8>>> {
        Ok(self.read()?.get(index).map(<[u8]>::to_vec))
    }

    pub fn get_translated(&self, index: usize) -> Result<Option<Vec<u8>>> {
        Ok(self.read()?.get_translated(index).map(<[u8]>::to_vec))
    }

    pub fn index_of(&self, query: &[u8]) -> Result<Option<usize>> {
        Ok(self.read()?.index_of(query))
    }

    /// Owned counterpart of [`CatalogReader::translate`].
    pub fn translate(&self, query: &[u8]) -> Result<Vec<u8>> {
        Ok(self.read()?.translate(query).to_vec())
    }
}

impl From<CatalogReader> for SharedCatalog {
    fn from(reader: CatalogReader) -> Self {
        Self {
            inner: Arc::new(RwLock::new(reader)),
        }
    }
}
