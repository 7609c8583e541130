//! Storefront Backend Library
//!
//! This library provides the state engine for a storefront application:
//! a static product catalog with filtering, a per-session shopping cart
//! and wishlist, derived pricing, and a mock authentication flow.

// Domain modules
pub mod auth;
pub mod shop;

// Infrastructure
pub mod router;
