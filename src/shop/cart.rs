//! Shopping Cart
//!
//! Ordered collection of cart lines with the mutation operations issued by
//! the storefront. At most one line exists per product; a quantity that
//! would reach zero removes the line instead of storing it.

use tracing::warn;

use super::catalog::Catalog;
use super::models::CartLine;

/// A single session's shopping cart.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product: increments an existing line, or pushes
    /// a new quantity-1 line.
    ///
    /// Unknown product ids and out-of-stock products are rejected as silent
    /// no-ops (logged). Stock is enforced here rather than left to the UI
    /// so the policy is testable.
    pub fn add(&mut self, catalog: &Catalog, product_id: u32) {
        let product = match catalog.get(product_id) {
            Ok(p) => p,
            Err(e) => {
                warn!("add_to_cart ignored: {}", e);
                return;
            }
        };
        if !product.in_stock {
            warn!("add_to_cart ignored: product {} is out of stock", product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product_id,
                quantity: 1,
            });
        }
    }

    /// Deletes the line for a product. No-op when absent.
    pub fn remove(&mut self, product_id: u32) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Sets the quantity of an existing line. A quantity of zero or below
    /// removes the line; an absent product id is a no-op (this operation
    /// never creates lines). Values beyond `u32::MAX` are clamped so a
    /// stored line always keeps a quantity of at least 1.
    pub fn set_quantity(&mut self, product_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities. Accumulated in `u64` so carts holding
    /// clamp-sized lines cannot overflow the sum.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// The cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
