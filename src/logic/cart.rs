/// Item count chosen on the product detail view. Never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Default for Quantity {
    fn default() -> Self {
        Self(1)
    }
}

impl Quantity {
    /// Current count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Add one.
    pub const fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Remove one, stopping at 1.
    pub const fn decrement(&mut self) {
        if self.0 > 1 {
            self.0 -= 1;
        }
    }
}

/// What: Confirmation line for "add to cart".
///
/// Inputs:
/// - `qty`: Chosen quantity
/// - `title`: Product title
///
/// Output: e.g. `"2 × Backpack added to cart!"`.
#[must_use]
pub fn added_to_cart_message(qty: Quantity, title: &str) -> String {
    format!("{} × {title} added to cart!", qty.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Quantity floor and cart message
    ///
    /// - Input: Decrement from 1, then increment twice
    /// - Output: Stays 1, then 3; message uses the multiplication sign
    fn quantity_never_below_one() {
        let mut q = Quantity::default();
        q.decrement();
        assert_eq!(q.get(), 1);
        q.increment();
        q.increment();
        assert_eq!(q.get(), 3);
        assert_eq!(added_to_cart_message(q, "Backpack"), "3 × Backpack added to cart!");
    }
}
