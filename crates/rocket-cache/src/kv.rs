//! Key-Value store wrapper with automatic serialization.

use std::sync::Arc;

use crate::store::KeyValueStore;
use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over a [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<dyn KeyValueStore>,
}

impl Cache {
    /// Wrap a store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::new(FileStore::open(".rocket")?);
    /// ```
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Wrap a store that is already shared.
    pub fn from_shared(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Cart> = cache.get("@RocketShoes:cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing any previous value.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("@RocketShoes:cart", &cart)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.store.get(key)?.is_some())
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```rust
/// let key = rocket_cache::cache_key!("@RocketShoes", "cart");
/// assert_eq!(key, "@RocketShoes:cart");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Line {
        id: u64,
        amount: i64,
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::new(MemoryStore::new());
        let lines = vec![Line { id: 1, amount: 2 }];

        cache.set("cart", &lines).unwrap();
        let restored: Option<Vec<Line>> = cache.get("cart").unwrap();

        assert_eq!(restored, Some(lines));
    }

    #[test]
    fn test_get_missing() {
        let cache = Cache::new(MemoryStore::new());
        let value: Option<Vec<Line>> = cache.get("missing").unwrap();
        assert!(value.is_none());
        assert!(!cache.exists("missing").unwrap());
    }

    #[test]
    fn test_get_corrupt_value() {
        let store = Arc::new(MemoryStore::new());
        store.set("cart", "{not json").unwrap();
        let cache = Cache::from_shared(store);

        let result: Result<Option<Vec<Line>>, _> = cache.get("cart");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_delete() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("cart", &Vec::<Line>::new()).unwrap();
        assert!(cache.exists("cart").unwrap());

        cache.delete("cart").unwrap();
        assert!(!cache.exists("cart").unwrap());
    }

    #[test]
    fn test_cache_key_macro() {
        assert_eq!(cache_key!("@RocketShoes", "cart"), "@RocketShoes:cart");
        assert_eq!(cache_key!("shop", "cart", 7), "shop:cart:7");
    }
}
