//! Storefront Domain Module
//!
//! This module contains the shopping state engine, including:
//! - Domain models (Product, CartLine, FilterState, payloads)
//! - The static catalog and its seed data
//! - Catalog filtering
//! - Cart and wishlist state with their mutation operations
//! - Derived pricing
//! - REST API handlers and application state

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod pricing;
pub mod state;
pub mod wishlist;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
