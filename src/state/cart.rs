//! Cart state: an ordered list of line items with derived totals.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

/// One product entry in the cart. At most one item exists per `food_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub food_id: u64,
    pub quantity: u32,
    /// May arrive as NaN when the menu has not been enriched yet; the total
    /// treats such items as costing nothing rather than poisoning the sum.
    pub food_price: f64,
    /// Empty until enriched from the menu payload.
    pub food_name: String,
}

/// Shared cart list state, held in a signal and read reactively for totals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Set the quantity for `food_id`, inserting a new line item when the
    /// product is not in the cart yet.
    ///
    /// On an existing item only the quantity is overwritten; price and name
    /// keep whatever enrichment they already carry. A zero quantity stays in
    /// the cart as a zero-quantity line; removal is always explicit via
    /// [`Self::remove_cart`].
    pub fn update_cart(&mut self, food_id: u64, quantity: u32, food_price: f64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.food_id == food_id) {
            item.quantity = quantity;
        } else {
            self.items.push(CartItem {
                food_id,
                quantity,
                food_price,
                food_name: String::new(),
            });
        }
    }

    /// Remove every line item for `food_id`. No-op when absent.
    pub fn remove_cart(&mut self, food_id: u64) {
        self.items.retain(|item| item.food_id != food_id);
    }

    /// Total quantity across all line items, recomputed per read.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Total price across all line items. Non-finite prices contribute
    /// nothing, so the aggregate is never NaN.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| {
                let price = if item.food_price.is_finite() {
                    item.food_price
                } else {
                    0.0
                };
                f64::from(item.quantity) * price
            })
            .sum()
    }
}
