//! # mo-reader
//!
//! A reader for compiled gettext message catalogs (`.mo` files).
//!
//! The whole file is loaded into memory, its header is validated, and
//! translations are looked up by binary search over the sorted table of
//! original strings. Strings are treated as opaque NUL-terminated bytes.
//!
//! ```no_run
//! use mo_reader::CatalogReader;
//!
//! let mut catalog = CatalogReader::new();
//! if catalog.open("locale/es/messages.mo").is_ok() {
//!     assert_eq!(catalog.translate(b"banana"), b"pl\xc3\xa1tano");
//! }
//! ```
pub mod mo;

// Re-export the main types for convenience
pub use mo::{
    CatalogReader,
    MoError,
    Result,
    SharedCatalog,
    iter::Entries,
    types::models::{
        MoHeader,
        Revision,
        Table,
        TableEntry,
        HEADER_LEN,
        MAGIC,
    },
    utils::{cstr_at, read_i32_at, read_u32_at},
};
