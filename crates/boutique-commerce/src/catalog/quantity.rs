//! Quantity selector state for the product page.

/// A quantity bounded to `[1, max]`.
///
/// `max` is normally the selected variant's stock. A `max` below 1 still
/// allows a quantity of 1; the stock check in [`crate::catalog::cart_line_for`]
/// is what refuses the add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    quantity: u32,
    max: u32,
}

impl QuantitySelector {
    /// Start at 1 with the given upper bound.
    pub fn new(max: u32) -> Self {
        Self { quantity: 1, max }
    }

    /// Current quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Upper bound.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Change the upper bound (e.g., after picking another variant).
    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        self.quantity = self.clamp(i64::from(self.quantity));
    }

    /// Whether the "-" button is enabled.
    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    /// Whether the "+" button is enabled.
    pub fn can_increment(&self) -> bool {
        self.quantity < self.max
    }

    /// Step down by one, never below 1.
    pub fn decrement(&mut self) {
        if self.can_decrement() {
            self.quantity -= 1;
        }
    }

    /// Step up by one, never above `max`.
    pub fn increment(&mut self) {
        if self.can_increment() {
            self.quantity += 1;
        }
    }

    /// Set directly, clamped into range.
    pub fn set(&mut self, quantity: i64) {
        self.quantity = self.clamp(quantity);
    }

    /// Set from typed text; anything that isn't an integer counts as 1.
    pub fn set_from_input(&mut self, input: &str) {
        let value = input.trim().parse::<i64>().unwrap_or(1);
        self.set(value);
    }

    fn clamp(&self, quantity: i64) -> u32 {
        let upper = i64::from(self.max.max(1));
        quantity.clamp(1, upper) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_bounded() {
        let mut q = QuantitySelector::new(2);
        q.decrement();
        assert_eq!(q.quantity(), 1);

        q.increment();
        q.increment();
        assert_eq!(q.quantity(), 2);
        assert!(!q.can_increment());
        assert!(q.can_decrement());
    }

    #[test]
    fn test_set_clamps() {
        let mut q = QuantitySelector::new(5);
        q.set(9);
        assert_eq!(q.quantity(), 5);
        q.set(-3);
        assert_eq!(q.quantity(), 1);
    }

    #[test]
    fn test_set_from_input() {
        let mut q = QuantitySelector::new(10);
        q.set_from_input("4");
        assert_eq!(q.quantity(), 4);
        q.set_from_input("deux");
        assert_eq!(q.quantity(), 1);
        q.set_from_input("");
        assert_eq!(q.quantity(), 1);
    }

    #[test]
    fn test_lowering_max_clamps_quantity() {
        let mut q = QuantitySelector::new(10);
        q.set(8);
        q.set_max(3);
        assert_eq!(q.quantity(), 3);
    }

    #[test]
    fn test_zero_max_keeps_one() {
        let mut q = QuantitySelector::new(0);
        q.increment();
        assert_eq!(q.quantity(), 1);
        assert!(!q.can_increment());
    }
}
