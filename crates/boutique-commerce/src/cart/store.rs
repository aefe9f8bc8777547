//! The cart store: current cart snapshot plus its persistence.

use std::sync::Arc;

use crate::cart::{Cart, CartLine, CartPersistence};
use crate::ids::VariantId;
use crate::money::Money;

/// Owns the current cart and keeps storage in step with it.
///
/// Construct one per UI context and pass it to whatever needs it. Every
/// mutation builds a new [`Cart`] snapshot, swaps it in, then saves it.
/// Saving is best effort: a failed save is logged and the in-memory cart
/// stays authoritative for the session.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = CartStore::open(KvCartPersistence::new(FileStore::open(dir)?));
/// store.add_item(CartLine::new(VariantId::new(1), 2).with_price("10.00"));
/// assert_eq!(store.total_price().display_amount(), "20.00");
/// ```
#[derive(Debug)]
pub struct CartStore<P> {
    cart: Arc<Cart>,
    persistence: P,
}

impl<P: CartPersistence> CartStore<P> {
    /// Open a store, restoring whatever `persistence` last saved.
    ///
    /// A missing entry gives an empty cart. So does an unreadable one, after
    /// a warning.
    pub fn open(persistence: P) -> Self {
        let cart = match persistence.load() {
            Ok(Some(cart)) => {
                tracing::debug!(lines = cart.line_count(), "restored cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not restore cart, starting empty");
                Cart::new()
            }
        };

        Self {
            cart: Arc::new(cart),
            persistence,
        }
    }

    /// Add a line, merging into an existing line for the same variant.
    pub fn add_item(&mut self, line: CartLine) {
        self.commit(|cart| cart.add_item(line));
    }

    /// Remove a variant's line. No-op if absent.
    pub fn remove_item(&mut self, variant_id: VariantId) {
        self.commit(|cart| {
            cart.remove_item(variant_id);
        });
    }

    /// Set a variant's quantity; `<= 0` removes it. No-op if absent.
    pub fn update_quantity(&mut self, variant_id: VariantId, quantity: i64) {
        self.commit(|cart| {
            cart.update_quantity(variant_id, quantity);
        });
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.commit(Cart::clear);
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    /// Sum of `price × quantity`.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Current lines.
    pub fn items(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Current cart snapshot. Later mutations don't affect it.
    pub fn snapshot(&self) -> Arc<Cart> {
        Arc::clone(&self.cart)
    }

    /// Borrow the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Borrow the persistence adapter.
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    fn commit(&mut self, mutate: impl FnOnce(&mut Cart)) {
        let mut next = Cart::clone(&self.cart);
        mutate(&mut next);
        self.cart = Arc::new(next);

        if let Err(e) = self.persistence.save(&self.cart) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }
}
