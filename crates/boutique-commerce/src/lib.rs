//! Cart, catalog and checkout domain logic for the boutique storefront.
//!
//! This crate provides the client-side pieces of the storefront:
//!
//! - **Cart**: cart lines, the cart value, and a persisted cart store
//! - **Catalog**: products and variants, the size/color picker, the quantity
//!   selector and the add-to-cart checks
//! - **Checkout**: the order request, the order gateway and the guest
//!   checkout flow
//!
//! # Example
//!
//! ```rust,ignore
//! use boutique_commerce::prelude::*;
//! use boutique_cache::FileStore;
//!
//! // Open the cart saved by the previous session
//! let mut store = CartStore::open(KvCartPersistence::new(FileStore::open(dir)?));
//!
//! // Add the selected variant
//! let line = cart_line_for(&product, product.default_variant(), 2)?;
//! store.add_item(line);
//! println!("Total: {}", store.total_price());
//!
//! // Check out
//! let gateway = HttpOrderGateway::new("http://localhost:8000/api/v1");
//! let order = place_order(&mut store, &gateway, customer).await?;
//! println!("Order {}", order.reference);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Cart
    pub use crate::cart::{
        Cart, CartLine, CartPersistence, CartStore, KvCartPersistence, NoopPersistence,
        CART_STORAGE_KEY,
    };

    // Catalog
    pub use crate::catalog::{cart_line_for, Product, ProductVariant, QuantitySelector};

    // Checkout
    pub use crate::checkout::{
        place_order, CheckoutItem, CheckoutRequest, CustomerDetails, HttpOrderGateway,
        OrderConfirmation, OrderGateway,
    };
}
