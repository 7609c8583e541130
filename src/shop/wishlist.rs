//! Wishlist
//!
//! A set of product identifiers toggled independently of cart membership.
//! Ids are not validated against the catalog; the caller decides what to
//! pass, matching the storefront's behavior.

use std::collections::BTreeSet;

/// A single session's wishlist.
#[derive(Debug, Default)]
pub struct Wishlist {
    ids: BTreeSet<u32>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of a product id and returns the new state:
    /// `true` when the id was added, `false` when removed.
    pub fn toggle(&mut self, product_id: u32) -> bool {
        if self.ids.remove(&product_id) {
            false
        } else {
            self.ids.insert(product_id);
            true
        }
    }

    pub fn contains(&self, product_id: u32) -> bool {
        self.ids.contains(&product_id)
    }

    /// All wishlisted ids, ascending.
    pub fn ids(&self) -> Vec<u32> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
