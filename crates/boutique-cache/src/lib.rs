//! Type-safe key-value storage layer for the boutique storefront.
//!
//! Provides the durable client-side storage that keeps the shopping cart
//! across sessions. Values are stored as JSON under namespaced keys, on top of
//! a pluggable byte store.
//!
//! # Example
//!
//! ```rust,ignore
//! use boutique_cache::{Cache, FileStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct PersistedCart {
//!     items: Vec<CartLine>,
//! }
//!
//! let cache = Cache::new(FileStore::open("/home/me/.local/share/boutique")?);
//!
//! // Store a value
//! cache.set("cart-storage", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<PersistedCart> = cache.get("cart-storage")?;
//!
//! // Delete a value
//! cache.delete("cart-storage")?;
//! ```

mod error;
mod file;
mod kv;
mod store;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::Cache;
pub use store::{KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
