//! Storefront Domain Models
//!
//! This module contains all data structures related to the shopping
//! business domain: products, cart lines, filter state, and the
//! request/response payloads of the REST surface.

use serde::{Deserialize, Serialize};

use super::pricing::PricingSnapshot;

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// Fixed set of product categories carried by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    Home,
}

/// An immutable product record, seeded once at session start.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    pub id: u32,

    /// Display name of the product
    pub name: String,

    /// Current unit price
    pub price: f64,

    /// Pre-discount price, present only for discounted products.
    /// Always >= `price` in the seed data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,

    pub category: Category,

    /// Average rating, 0.0 to 5.0
    pub rating: f64,

    /// Number of reviews behind the rating
    pub reviews: u32,

    pub description: String,

    /// Whether the product can currently be purchased
    pub in_stock: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_trending: bool,

    /// Optional promotional label (e.g. "Premium", "Bestseller")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

// =============================================================================
// Cart and Filter Models
// =============================================================================

/// A single cart line: a product reference plus a quantity.
///
/// Invariant: quantity is always >= 1. A quantity update that would reach
/// zero removes the line instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: u32,
    pub quantity: u32,
}

/// Category selector for the product filter. `All` disables the
/// category predicate entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Electronics,
    Fashion,
    Home,
}

impl CategoryFilter {
    /// Whether a product category passes this selector.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Electronics => category == Category::Electronics,
            CategoryFilter::Fashion => category == Category::Fashion,
            CategoryFilter::Home => category == Category::Home,
        }
    }
}

/// Current visibility state of the catalog: a category selector plus a
/// case-insensitive search term.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub category: CategoryFilter,

    #[serde(default)]
    pub search: String,
}

// =============================================================================
// REST Payloads
// =============================================================================

/// Input for cart mutations that target a single product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInput {
    /// Optional session identifier; minted when absent
    pub session_id: Option<String>,

    pub product_id: u32,
}

/// Input for the set-quantity operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetQuantityInput {
    pub session_id: Option<String>,
    pub product_id: u32,

    /// New quantity; zero or negative removes the line
    pub quantity: i64,
}

/// Input for session-wide cart operations (clear, checkout).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    pub session_id: Option<String>,
}

/// A cart line joined with its catalog product for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: u32,
    pub name: String,
    pub price: f64,
    pub quantity: u32,

    /// `price * quantity`, rounded to cents
    pub line_total: f64,

    /// `original_price - price` when the product is discounted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
}

/// Full cart projection returned by every cart endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub session_id: String,
    pub items: Vec<CartLineView>,
    pub pricing: PricingSnapshot,
}

/// Response for the checkout operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub status: String,
    pub session_id: String,

    /// One-line receipt, e.g. `"2x AirPods Pro Max, 1x Nike Air Zoom"`
    pub summary: String,

    pub pricing: PricingSnapshot,
}

/// Input for the wishlist toggle operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleWishlistInput {
    pub session_id: Option<String>,
    pub product_id: u32,
}

/// Response for wishlist operations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistView {
    pub session_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u32>,

    /// Membership of `product_id` after the toggle, when one was issued
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wishlisted: Option<bool>,

    pub ids: Vec<u32>,
}

/// Response for the product listing endpoint.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,

    /// The fixed selector list rendered as filter buttons
    pub categories: Vec<&'static str>,
}
