//! Durable key-value storage for the AeroPizza cart.
//!
//! A [`KeyValueStore`] holds raw bytes under string keys. [`Cache`] sits on
//! top of any store and adds automatic JSON serialization.
//!
//! Backends:
//! - [`MemoryStore`] - in-process map, for server rendering and tests
//! - [`FileStore`] - one JSON file per key inside a directory
//!
//! # Example
//!
//! ```rust
//! use aero_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("greeting", &vec!["ola".to_string()]).unwrap();
//!
//! let value: Option<Vec<String>> = cache.get("greeting").unwrap();
//! assert_eq!(value, Some(vec!["ola".to_string()]));
//!
//! cache.delete("greeting").unwrap();
//! assert!(!cache.exists("greeting").unwrap());
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
