//! Core catalog reader module

pub mod format;
pub mod iter;
pub mod reader;
pub mod shared;
pub mod types;
pub mod utils;

pub use reader::CatalogReader;
pub use shared::SharedCatalog;
pub use types::error::{MoError, Result};
