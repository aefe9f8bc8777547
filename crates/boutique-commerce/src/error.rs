//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// The cart store itself never returns these: its operations are total.
/// They come from the add-to-cart checks, checkout validation and the order
/// gateway.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// No variant was selected on the product page.
    #[error("No variant selected")]
    NoVariantSelected,

    /// Variant is out of stock.
    #[error("Variant {sku} is out of stock")]
    OutOfStock { sku: String },

    /// Requested more than the variant's stock.
    #[error("Only {available} of {sku} available, requested {requested}")]
    InsufficientStock {
        sku: String,
        requested: i64,
        available: i64,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error on customer details.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The backend refused the order.
    #[error("Checkout rejected ({status}): {message}")]
    CheckoutRejected { status: u16, message: String },

    /// The order could not be sent or its response could not be read.
    #[error("Checkout request failed: {0}")]
    RequestFailed(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<boutique_cache::CacheError> for CommerceError {
    fn from(e: boutique_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<reqwest::Error> for CommerceError {
    fn from(e: reqwest::Error) -> Self {
        CommerceError::RequestFailed(e.to_string())
    }
}
