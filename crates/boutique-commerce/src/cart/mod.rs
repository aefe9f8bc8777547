//! Shopping cart module.
//!
//! Contains the cart line and cart value types, the persistence adapters and
//! the store that ties them together.

mod cart;
mod line;
mod persistence;
mod store;

pub use cart::Cart;
pub use line::CartLine;
pub use persistence::{CartPersistence, KvCartPersistence, NoopPersistence, CART_STORAGE_KEY};
pub use store::CartStore;
