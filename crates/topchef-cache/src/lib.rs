//! Type-safe key-value store for the Top Chef cart.
//!
//! Values are stored as JSON under string keys. The store is backed by a
//! [`KvBackend`]: an in-memory map for tests and previews, or a directory of
//! JSON files for snapshots that must survive a restart.
//!
//! # Example
//!
//! ```rust
//! use topchef_cache::Cache;
//!
//! let mut cache = Cache::in_memory();
//! cache.set("topchef_cart", &vec![1, 2, 3]).unwrap();
//!
//! let items: Option<Vec<i32>> = cache.get("topchef_cart").unwrap();
//! assert_eq!(items, Some(vec![1, 2, 3]));
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{FileBackend, KvBackend, MemoryBackend};
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileBackend, KvBackend, MemoryBackend};
}
