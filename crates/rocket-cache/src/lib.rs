//! Type-safe Key-Value storage layer for RocketShoes.
//!
//! Provides string slot stores (in memory or on disk) and a typed cache on
//! top of them with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use rocket_cache::{cache_key, Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//! let key = cache_key!("@RocketShoes", "cart");
//!
//! cache.set(&key, &vec![1, 2, 3]).unwrap();
//! let value: Option<Vec<u32>> = cache.get(&key).unwrap();
//! assert_eq!(value, Some(vec![1, 2, 3]));
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{cache_key, Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
