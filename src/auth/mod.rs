//! Auth Module
//!
//! Stateless form validation plus the simulated submission flow. This is
//! a parallel flow with no shared shopping state.

pub mod handlers;
pub mod models;
pub mod validator;

// Re-export commonly used types and functions
pub use handlers::routes;
pub use validator::validate;
