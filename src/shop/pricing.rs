//! Cart Pricing
//!
//! Pure functions deriving the order summary from cart contents. Prices are
//! resolved through the catalog at compute time, never cached on the lines,
//! and the snapshot is recomputed on every query.

use serde::Serialize;

use super::cart::Cart;
use super::catalog::Catalog;
use super::models::Product;

/// Fixed tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.08;

/// Shipping is always free in this storefront.
pub const SHIPPING: f64 = 0.0;

/// Derived order summary. Never stored; purely a function of cart + catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSnapshot {
    pub total_items: u64,
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub grand_total: f64,
}

/// Rounds to cents, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum of `price * quantity` over all cart lines. Lines whose product id no
/// longer resolves contribute nothing; the cart keeps them out by construction.
pub fn subtotal(cart: &Cart, catalog: &Catalog) -> f64 {
    let raw: f64 = cart
        .lines()
        .iter()
        .filter_map(|line| {
            catalog
                .get(line.product_id)
                .ok()
                .map(|p| p.price * line.quantity as f64)
        })
        .sum();
    round2(raw)
}

/// Per-product display discount: `original_price - price` when discounted.
pub fn savings(product: &Product) -> Option<f64> {
    product.original_price.map(|original| round2(original - product.price))
}

/// Computes the full snapshot for the current cart contents.
pub fn snapshot(cart: &Cart, catalog: &Catalog) -> PricingSnapshot {
    let subtotal = subtotal(cart, catalog);
    let tax = round2(subtotal * TAX_RATE);
    PricingSnapshot {
        total_items: cart.total_items(),
        subtotal,
        tax,
        shipping: SHIPPING,
        grand_total: round2(subtotal + tax),
    }
}
