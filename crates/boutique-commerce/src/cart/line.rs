//! Cart line type.

use crate::ids::VariantId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One purchasable variant in the cart and the quantity wanted.
///
/// `sku`, `title`, `price` and `image` are snapshots copied from the catalog
/// when the line was first added. The cart never re-checks them; checkout
/// re-submits only `variant_id` and `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Variant being purchased. Unique within a cart.
    pub variant_id: VariantId,
    /// Quantity. At least 1 while the line is in a cart.
    pub quantity: u32,
    /// SKU at add time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Product title at add time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Unit price at add time, as the backend's decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Image URL at add time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLine {
    /// Create a line with no display fields.
    pub fn new(variant_id: VariantId, quantity: u32) -> Self {
        Self {
            variant_id,
            quantity,
            sku: None,
            title: None,
            price: None,
            image: None,
        }
    }

    /// Set the SKU snapshot.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Set the title snapshot.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the price snapshot.
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Set the image snapshot.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Unit price read from the snapshot; zero when missing or unparseable.
    pub fn unit_price(&self) -> Money {
        Money::from_price(self.price.as_deref())
    }

    /// `unit_price × quantity`.
    pub fn line_total(&self) -> Money {
        self.unit_price()
            .saturating_multiply(i64::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let line = CartLine::new(VariantId::new(3), 2)
            .with_sku("ROBE-M-NOIR")
            .with_title("Robe longue")
            .with_price("4500.00")
            .with_image("https://cdn.example/robe.jpg");

        assert_eq!(line.sku.as_deref(), Some("ROBE-M-NOIR"));
        assert_eq!(line.line_total(), Money::new(900_000));
    }

    #[test]
    fn test_bad_price_totals_zero() {
        let line = CartLine::new(VariantId::new(2), 4).with_price("abc");
        assert_eq!(line.unit_price(), Money::zero());
        assert_eq!(line.line_total(), Money::zero());
    }

    #[test]
    fn test_serialized_shape() {
        let line = CartLine::new(VariantId::new(1), 2).with_price("10.00");
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"variant_id": 1, "quantity": 2, "price": "10.00"})
        );
    }

    #[test]
    fn test_deserialize_without_display_fields() {
        let line: CartLine = serde_json::from_str(r#"{"variant_id": 9, "quantity": 1}"#).unwrap();
        assert_eq!(line, CartLine::new(VariantId::new(9), 1));
    }
}
