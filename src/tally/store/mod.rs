//! # Storage Layer
//!
//! This module defines the storage abstraction for tally. The
//! [`CatalogStore`] trait lets the command layer work with different
//! backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing the command layer
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. The whole catalog
//!   lives in one JSON file, one record per product with its full attribute
//!   set. The encoding is field-by-field and stable across builds and
//!   platforms; nothing about the in-memory representation leaks into the
//!   file.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No
//!   persistence, fast, isolated test execution.
//!
//! ## Persistence cadence
//!
//! A store round-trips the catalog as a whole: `load` the current state,
//! mutate in memory, `save` the result. Mutating commands save after every
//! change, so an abnormal exit never loses more than the operation in
//! flight. A missing file on `load` is not an error; it yields an empty
//! catalog (first run, or the file was removed out-of-band).

use crate::catalog::Catalog;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
///
/// Implementations must guarantee that `save` followed by `load` yields a
/// catalog equal in attributes and order to what was saved.
pub trait CatalogStore {
    /// Load the persisted catalog. A missing backing file yields an empty
    /// catalog.
    fn load(&self) -> Result<Catalog>;

    /// Persist the full catalog, replacing whatever was stored before.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;
}
