//! Typed dataset: fields, records, tables, and the loader.

mod field;
mod loader;
mod reader;
mod table;

pub use field::Field;
pub use loader::{LoadedDataset, Loader, LoaderConfig, SourceMetadata, clean, load};
pub use table::{Record, Table};

pub(crate) use table::ensure_numeric;

#[cfg(test)]
pub(crate) use table::fixtures;
