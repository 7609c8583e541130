//! REST API handlers for the storefront engine
//!
//! This module implements the HTTP boundary the rendering layer talks to:
//! read-only projections (filtered products, cart view, wishlist) and the
//! write paths (add/remove/quantity/clear/toggle/checkout).

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use super::cart::Cart;
use super::catalog::CATEGORY_NAMES;
use super::filter::filter_products;
use super::helpers::{cart_view, format_item_summary};
use super::models::*;
use super::state::{get_or_create_session_id, SharedState};

/// Creates routes for catalog, cart and wishlist operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/cart/add", post(add_to_cart))
        .route("/cart/remove", post(remove_from_cart))
        .route("/cart/quantity", post(set_quantity))
        .route("/cart/clear", post(clear_cart))
        .route("/cart/checkout", post(checkout))
        .route("/cart/:session_id", get(get_cart))
        .route("/wishlist/toggle", post(toggle_wishlist))
        .route("/wishlist/:session_id", get(get_wishlist))
}

/// Endpoint: GET /products?category=...&search=...
/// Returns the visible catalog subset for the given filter state.
async fn list_products(
    State(state): State<SharedState>,
    Query(filter): Query<FilterState>,
) -> impl IntoResponse {
    let products = filter_products(state.catalog.all(), &filter)
        .into_iter()
        .cloned()
        .collect();

    Json(ProductListResponse {
        products,
        categories: CATEGORY_NAMES.to_vec(),
    })
}

/// Endpoint: POST /cart/add
/// Adds one unit of a product to the session cart.
async fn add_to_cart(
    State(state): State<SharedState>,
    Json(payload): Json<CartItemInput>,
) -> impl IntoResponse {
    let session_id = get_or_create_session_id(payload.session_id);

    let mut session = state.sessions.entry(session_id.clone()).or_default();
    session.cart.add(&state.catalog, payload.product_id);

    Json(cart_view(session_id, &session.cart, &state.catalog))
}

/// Endpoint: POST /cart/remove
/// Deletes a product's line from the session cart.
async fn remove_from_cart(
    State(state): State<SharedState>,
    Json(payload): Json<CartItemInput>,
) -> impl IntoResponse {
    let session_id = get_or_create_session_id(payload.session_id);

    let mut session = state.sessions.entry(session_id.clone()).or_default();
    session.cart.remove(payload.product_id);

    Json(cart_view(session_id, &session.cart, &state.catalog))
}

/// Endpoint: POST /cart/quantity
/// Sets the quantity of an existing cart line; zero or below removes it.
async fn set_quantity(
    State(state): State<SharedState>,
    Json(payload): Json<SetQuantityInput>,
) -> impl IntoResponse {
    let session_id = get_or_create_session_id(payload.session_id);

    let mut session = state.sessions.entry(session_id.clone()).or_default();
    session.cart.set_quantity(payload.product_id, payload.quantity);

    Json(cart_view(session_id, &session.cart, &state.catalog))
}

/// Endpoint: POST /cart/clear
/// Empties the session cart.
async fn clear_cart(
    State(state): State<SharedState>,
    Json(payload): Json<SessionInput>,
) -> impl IntoResponse {
    let session_id = get_or_create_session_id(payload.session_id);

    let mut session = state.sessions.entry(session_id.clone()).or_default();
    session.cart.clear();

    Json(cart_view(session_id, &session.cart, &state.catalog))
}

/// Endpoint: POST /cart/checkout
/// Clears the session cart and returns the final pricing plus a receipt line.
async fn checkout(
    State(state): State<SharedState>,
    Json(payload): Json<SessionInput>,
) -> impl IntoResponse {
    let session_id = get_or_create_session_id(payload.session_id);

    let mut session = state.sessions.entry(session_id.clone()).or_default();
    let summary = format_item_summary(&session.cart, &state.catalog);
    let pricing = super::pricing::snapshot(&session.cart, &state.catalog);
    session.cart.clear();

    info!("checkout: session {} - {}", session_id, summary);

    Json(CheckoutResponse {
        status: "checked_out".to_string(),
        session_id,
        summary,
        pricing,
    })
}

/// Endpoint: GET /cart/:session_id
/// Read-only cart projection.
async fn get_cart(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let view = match state.sessions.get(&session_id) {
        Some(session) => cart_view(session_id, &session.cart, &state.catalog),
        None => cart_view(session_id, &Cart::new(), &state.catalog),
    };
    Json(view)
}

/// Endpoint: POST /wishlist/toggle
/// Flips a product's wishlist membership.
async fn toggle_wishlist(
    State(state): State<SharedState>,
    Json(payload): Json<ToggleWishlistInput>,
) -> impl IntoResponse {
    let session_id = get_or_create_session_id(payload.session_id);

    let mut session = state.sessions.entry(session_id.clone()).or_default();
    let wishlisted = session.wishlist.toggle(payload.product_id);

    Json(WishlistView {
        session_id,
        product_id: Some(payload.product_id),
        wishlisted: Some(wishlisted),
        ids: session.wishlist.ids(),
    })
}

/// Endpoint: GET /wishlist/:session_id
/// Read-only wishlist projection.
async fn get_wishlist(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let ids = state
        .sessions
        .get(&session_id)
        .map(|s| s.wishlist.ids())
        .unwrap_or_default();

    Json(WishlistView {
        session_id,
        product_id: None,
        wishlisted: None,
        ids,
    })
}
