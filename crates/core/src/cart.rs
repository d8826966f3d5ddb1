//! In-memory shopping cart state machine.
//!
//! A [`Cart`] is an insertion-ordered list of [`LineItem`]s keyed by exact
//! product name. All transitions run synchronously on an exclusively owned
//! value; callers (the storefront keeps one per session) mutate it and then
//! re-render, so a render pass never observes a half-applied transition.

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// A single cart line.
///
/// Invariant: `quantity >= 1`. A line whose quantity would drop to zero is
/// removed from the cart instead of being retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name, the cart's uniqueness key (exact, case-sensitive).
    pub name: String,
    /// Unit price captured at first add. Later adds of the same name do
    /// not update it.
    pub unit_price: Price,
    /// Image shown in the cart row, captured at first add.
    pub image_url: String,
    /// Units of this product in the cart.
    pub quantity: u32,
}

impl LineItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Insertion-ordered cart.
///
/// Lines keep their first-add order; incrementing an existing line never
/// reorders it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The cart lines, in first-add order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total unit count across all lines (the badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |count, item| count.saturating_add(item.quantity))
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items
            .iter()
            .fold(Price::ZERO, |total, item| total.plus(item.line_total()))
    }

    /// Add one unit of a product.
    ///
    /// If a line with the same name exists its quantity is incremented and
    /// its price/image are left as captured at first add; otherwise a new
    /// line with quantity 1 is appended.
    pub fn add(&mut self, name: &str, unit_price: Price, image_url: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.name == name) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem {
                name: name.to_owned(),
                unit_price,
                image_url: image_url.to_owned(),
                quantity: 1,
            });
        }
    }

    /// Adjust the quantity of the line at `index` by `delta`.
    ///
    /// A resulting quantity of zero or below removes the line. An
    /// out-of-range index is a no-op.
    pub fn increment(&mut self, index: usize, delta: i32) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        let quantity = i64::from(item.quantity) + i64::from(delta);
        if quantity <= 0 {
            self.items.remove(index);
        } else {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove the line at `index` unconditionally. Out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
