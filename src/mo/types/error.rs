//! Custom error types for the mo-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum MoError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The first four bytes are not the catalog magic number.
    #[error("Not a catalog file: bad magic {found:#010x}")]
    InvalidMagic { found: u32 },

    /// The buffer is too short to hold the fixed header.
    #[error("Truncated header: catalog is {len} bytes, header needs 28")]
    TruncatedHeader { len: usize },

    /// A read would run past the end of the buffer.
    #[error("Read at offset {offset} is out of bounds for a {len}-byte catalog")]
    OutOfBounds { offset: usize, len: usize },

    /// A string index is not below the catalog's string count.
    #[error("String index {index} is out of range (catalog holds {count} strings)")]
    IndexOutOfRange { index: usize, count: usize },

    /// A string starting at `offset` has no NUL terminator before end of buffer.
    #[error("String at offset {offset} is not NUL-terminated")]
    UnterminatedString { offset: usize },

    /// A lock was poisoned, indicating a panic in another thread holding the lock.
    #[error("A lock was poisoned, indicating a panic in another thread holding the lock.")]
    LockPoisoned,
}

/// A convenience `Result` type alias using the crate's `MoError` type.
pub type Result<T> = std::result::Result<T, MoError>;
