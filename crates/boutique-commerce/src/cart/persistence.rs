//! Persistence adapters for the cart store.

use boutique_cache::{Cache, KvStore};

use crate::cart::Cart;
use crate::error::CommerceError;

/// Storage key the cart lives under.
pub const CART_STORAGE_KEY: &str = "cart-storage";

/// Where cart snapshots are saved and loaded from.
///
/// The store calls `save` after every mutation and `load` once when it is
/// opened. Errors are reported to the store, which logs and ignores them.
pub trait CartPersistence {
    /// Persist a full snapshot.
    fn save(&self, cart: &Cart) -> Result<(), CommerceError>;

    /// Load the last saved snapshot, `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<Cart>, CommerceError>;
}

impl<P: CartPersistence + ?Sized> CartPersistence for &P {
    fn save(&self, cart: &Cart) -> Result<(), CommerceError> {
        (**self).save(cart)
    }

    fn load(&self) -> Result<Option<Cart>, CommerceError> {
        (**self).load()
    }
}

/// Persists the cart as JSON in a key-value store.
#[derive(Debug, Clone)]
pub struct KvCartPersistence<S> {
    cache: Cache<S>,
    key: String,
}

impl<S: KvStore> KvCartPersistence<S> {
    /// Persist under [`CART_STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    /// Persist under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            key: key.into(),
        }
    }

    /// The storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying byte store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }
}

impl<S: KvStore> CartPersistence for KvCartPersistence<S> {
    fn save(&self, cart: &Cart) -> Result<(), CommerceError> {
        self.cache.set(&self.key, cart)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Cart>, CommerceError> {
        Ok(self.cache.get::<Cart>(&self.key)?)
    }
}

/// Keeps nothing: the cart lives only as long as the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPersistence;

impl CartPersistence for NoopPersistence {
    fn save(&self, _cart: &Cart) -> Result<(), CommerceError> {
        Ok(())
    }

    fn load(&self) -> Result<Option<Cart>, CommerceError> {
        Ok(None)
    }
}
