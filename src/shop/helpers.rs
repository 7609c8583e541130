//! Storefront Business Logic Helpers
//!
//! Projection builders joining cart state with the catalog, plus receipt
//! formatting.

use super::cart::Cart;
use super::catalog::Catalog;
use super::models::{CartLineView, CartView};
use super::pricing;

/// Joins the cart lines with their catalog products into the display
/// projection returned by every cart endpoint.
pub fn cart_view(session_id: String, cart: &Cart, catalog: &Catalog) -> CartView {
    let items = cart
        .lines()
        .iter()
        .filter_map(|line| {
            let product = catalog.get(line.product_id).ok()?;
            Some(CartLineView {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                quantity: line.quantity,
                line_total: pricing::round2(product.price * line.quantity as f64),
                savings: pricing::savings(product),
            })
        })
        .collect();

    CartView {
        session_id,
        items,
        pricing: pricing::snapshot(cart, catalog),
    }
}

/// Produces a human-readable one-line summary for the cart contents.
///
/// Example output: `"2x AirPods Pro Max, 1x Nike Air Zoom"`.
pub fn format_item_summary(cart: &Cart, catalog: &Catalog) -> String {
    cart.lines()
        .iter()
        .map(|line| {
            let name = catalog
                .get(line.product_id)
                .map(|p| p.name.as_str())
                .unwrap_or("unknown product");
            format!("{}x {}", line.quantity, name)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
