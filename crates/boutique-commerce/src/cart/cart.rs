//! Cart value type.

use crate::cart::CartLine;
use crate::checkout::CheckoutItem;
use crate::ids::VariantId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart: lines in insertion order, at most one per variant.
///
/// Every operation is total. Quantities at or below zero remove a line
/// rather than failing, and nothing here consults the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "CartRecord")]
pub struct Cart {
    #[serde(rename = "items")]
    lines: Vec<CartLine>,
}

/// Stored layout: `{"items": [...]}`. Decoding goes through
/// [`Cart::from_lines`] so hand-edited storage can't break the invariants.
#[derive(Deserialize)]
struct CartRecord {
    #[serde(default)]
    items: Vec<CartLine>,
}

impl From<CartRecord> for Cart {
    fn from(record: CartRecord) -> Self {
        Cart::from_lines(record.items)
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw lines, merging duplicates and dropping empty lines.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            cart.add_item(line);
        }
        cart
    }

    /// Add a line.
    ///
    /// If the variant is already in the cart its quantity grows by
    /// `line.quantity` and the existing display fields are kept. A zero
    /// quantity is ignored.
    pub fn add_item(&mut self, line: CartLine) {
        if line.quantity == 0 {
            return;
        }

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.variant_id == line.variant_id)
        {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
            return;
        }

        self.lines.push(line);
    }

    /// Remove the line for a variant. Returns whether a line was removed.
    pub fn remove_item(&mut self, variant_id: VariantId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.variant_id != variant_id);
        self.lines.len() < len_before
    }

    /// Set a line's quantity.
    ///
    /// `quantity <= 0` removes the line. Returns whether the cart changed;
    /// a variant that isn't in the cart is never created.
    pub fn update_quantity(&mut self, variant_id: VariantId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(variant_id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.lines.iter_mut().find(|l| l.variant_id == variant_id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a variant.
    pub fn line(&self, variant_id: VariantId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.variant_id == variant_id)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct variants.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price × quantity` over all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total for a single variant's line.
    pub fn line_total(&self, variant_id: VariantId) -> Option<Money> {
        self.line(variant_id).map(CartLine::line_total)
    }

    /// `{variant_id, quantity}` pairs for the checkout request.
    pub fn checkout_items(&self) -> Vec<CheckoutItem> {
        self.lines
            .iter()
            .map(|l| CheckoutItem {
                variant_id: l.variant_id,
                quantity: l.quantity,
            })
            .collect()
    }
}

impl FromIterator<CartLine> for Cart {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: i64, quantity: u32, price: &str) -> CartLine {
        CartLine::new(VariantId::new(id), quantity).with_price(price)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_add_same_variant_merges() {
        let mut cart = Cart::new();
        cart.add_item(line(1, 2, "10.00"));
        cart.add_item(line(1, 3, "10.00"));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(VariantId::new(1)).map(|l| l.quantity), Some(5));
        assert_eq!(cart.total_price(), Money::new(5000));
    }

    #[test]
    fn test_any_add_sequence_sums_into_one_line() {
        let quantities = [1u32, 7, 2, 1, 13, 4, 1, 9, 3, 6, 1, 20];
        let mut cart = Cart::new();
        let mut expected: u32 = 0;

        for (step, quantity) in quantities.iter().enumerate() {
            cart.add_item(line(42, *quantity, "2.50"));
            expected += quantity;

            assert_eq!(cart.line_count(), 1, "after add #{}", step);
            assert_eq!(cart.line(VariantId::new(42)).map(|l| l.quantity), Some(expected));
            assert_eq!(cart.total_items(), u64::from(expected));
        }

        assert_eq!(expected, 68);
        assert_eq!(cart.total_price(), Money::new(68 * 250));
    }

    #[test]
    fn test_interleaved_adds_merge_per_variant() {
        let mut cart = Cart::new();
        let sequence = [(1, 2), (2, 1), (1, 5), (3, 4), (2, 2), (1, 1), (3, 3)];
        for (id, quantity) in sequence {
            cart.add_item(line(id, quantity, "10.00"));
        }

        assert_eq!(cart.line_count(), 3);
        assert_eq!(cart.line(VariantId::new(1)).map(|l| l.quantity), Some(8));
        assert_eq!(cart.line(VariantId::new(2)).map(|l| l.quantity), Some(3));
        assert_eq!(cart.line(VariantId::new(3)).map(|l| l.quantity), Some(7));
        assert_eq!(cart.total_items(), 18);
        assert_eq!(cart.total_price(), Money::new(18_000));
    }

    #[test]
    fn test_add_keeps_first_display_fields() {
        let mut cart = Cart::new();
        cart.add_item(line(1, 1, "10.00").with_title("Old title"));
        cart.add_item(line(1, 1, "99.00").with_title("New title"));

        let l = cart.line(VariantId::new(1)).unwrap();
        assert_eq!(l.title.as_deref(), Some("Old title"));
        assert_eq!(l.price.as_deref(), Some("10.00"));
        assert_eq!(l.quantity, 2);
    }

    #[test]
    fn test_add_zero_quantity_is_ignored() {
        let mut cart = Cart::new();
        cart.add_item(line(1, 0, "10.00"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_saturates_quantity() {
        let mut cart = Cart::new();
        cart.add_item(line(1, u32::MAX, "1"));
        cart.add_item(line(1, 10, "1"));
        assert_eq!(cart.total_items(), u64::from(u32::MAX));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(line(3, 1, "1"));
        cart.add_item(line(1, 1, "1"));
        cart.add_item(line(3, 1, "1"));

        let ids: Vec<i64> = cart.lines().iter().map(|l| l.variant_id.get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_update_quantity_is_absolute() {
        let mut cart = Cart::new();
        cart.add_item(line(1, 4, "2.50"));

        assert!(cart.update_quantity(VariantId::new(1), 2));
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), Money::new(500));
    }

    #[test]
    fn test_update_quantity_non_positive_removes() {
        for quantity in [0, -5] {
            let mut cart = Cart::new();
            cart.add_item(line(1, 4, "2.50"));
            cart.add_item(line(2, 1, "1.00"));

            let mut expected = cart.clone();
            expected.remove_item(VariantId::new(1));

            assert!(cart.update_quantity(VariantId::new(1), quantity));
            assert_eq!(cart, expected);
        }
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(line(1, 1, "1"));
        let before = cart.clone();

        assert!(!cart.update_quantity(VariantId::new(9), 3));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(line(1, 1, "1"));
        let before = cart.clone();

        assert!(!cart.remove_item(VariantId::new(2)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_resets_totals() {
        let mut cart = Cart::new();
        cart.add_item(line(1, 2, "10.00"));
        cart.add_item(line(2, 1, "abc"));
        cart.clear();

        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_unparseable_price_contributes_zero() {
        let mut cart = Cart::new();
        cart.add_item(line(2, 1, "abc"));
        cart.add_item(line(3, 2, "1.25"));
        cart.add_item(CartLine::new(VariantId::new(4), 7));

        assert_eq!(cart.total_price(), Money::new(250));
        assert_eq!(cart.total_items(), 10);
        assert_eq!(cart.line_total(VariantId::new(2)), Some(Money::zero()));
    }

    #[test]
    fn test_from_lines_normalizes() {
        let cart: Cart = vec![line(1, 1, "1"), line(2, 0, "1"), line(1, 2, "1")]
            .into_iter()
            .collect();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_checkout_items() {
        let mut cart = Cart::new();
        cart.add_item(line(5, 2, "1").with_title("Sac"));
        cart.add_item(line(6, 1, "1"));

        let items = cart.checkout_items();
        assert_eq!(
            items,
            vec![
                CheckoutItem {
                    variant_id: VariantId::new(5),
                    quantity: 2
                },
                CheckoutItem {
                    variant_id: VariantId::new(6),
                    quantity: 1
                },
            ]
        );
    }

    #[test]
    fn test_deserialize_normalizes() {
        let cart: Cart = serde_json::from_str(
            r#"{"items": [
                {"variant_id": 1, "quantity": 1, "title": "A"},
                {"variant_id": 1, "quantity": 2, "title": "B"},
                {"variant_id": 2, "quantity": 0}
            ]}"#,
        )
        .unwrap();

        assert_eq!(cart.line_count(), 1);
        let l = cart.line(VariantId::new(1)).unwrap();
        assert_eq!(l.quantity, 3);
        assert_eq!(l.title.as_deref(), Some("A"));
    }

    #[test]
    fn test_serialized_layout() {
        let mut cart = Cart::new();
        cart.add_item(line(1, 2, "10.00"));
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"items": [{"variant_id": 1, "quantity": 2, "price": "10.00"}]})
        );
    }
}
