//! Key-Value store wrapper with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{CacheError, KvStore};

/// Type-safe cache over any [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KvStore> Cache<S> {
    /// Wrap a byte store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::new(MemoryStore::new());
    /// ```
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<PersistedCart> = cache.get("cart-storage")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("cart-storage", &cart)?;
    /// ```
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Borrow the underlying byte store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        count: u32,
    }

    #[test]
    fn test_typed_round_trip() {
        let cache = Cache::new(MemoryStore::new());
        let entry = Entry {
            name: "robe".to_string(),
            count: 2,
        };

        cache.set("entry", &entry).unwrap();
        let loaded: Option<Entry> = cache.get("entry").unwrap();
        assert_eq!(loaded, Some(entry));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let cache = Cache::new(MemoryStore::new());
        let loaded: Option<Entry> = cache.get("missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_undecodable_value_is_serialize_error() {
        let store = MemoryStore::new();
        store.set("entry", b"not json").unwrap();
        let cache = Cache::new(store);

        let result: Result<Option<Entry>, _> = cache.get("entry");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_delete_and_exists() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("entry", &1u32).unwrap();
        assert!(cache.exists("entry").unwrap());

        cache.delete("entry").unwrap();
        assert!(!cache.exists("entry").unwrap());
    }
}
