//! Order confirmation returned by the checkout endpoint.

use serde::{Deserialize, Serialize};

/// One line of a placed order, priced by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    #[serde(default)]
    pub sku_snapshot: String,
    #[serde(default)]
    pub title_snapshot: String,
    #[serde(default)]
    pub price_snapshot: String,
    pub quantity: u32,
    #[serde(default)]
    pub line_total: String,
}

/// The created order.
///
/// Only `reference` is guaranteed; the storefront shows it on the
/// confirmation page and uses it for guest order lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Human-meaningful order reference.
    pub reference: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    /// Subtotal as priced by the backend.
    #[serde(default)]
    pub subtotal: Option<String>,
    #[serde(default)]
    pub shipping_cost: Option<String>,
    /// Amount due, shipping included.
    #[serde(default)]
    pub total: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}
