//! Service inventory: record types, dataset sources and the cached store.

mod model;
mod source;
mod store;

pub use model::{Service, Technologies};
pub use source::{CatalogSource, DEFAULT_DATA_FILE, FileSource, candidate_paths};
pub use store::CatalogStore;

#[cfg(test)]
pub(crate) use store::tests as test_support;
