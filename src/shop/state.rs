//! Application State
//!
//! Holds the immutable catalog plus the per-session cart and wishlist
//! state. Sessions are keyed by a client-supplied identifier; a uuid is
//! minted when none is provided.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use uuid::Uuid;

use super::cart::Cart;
use super::catalog::Catalog;
use super::wishlist::Wishlist;

/// Default simulated latency of the mock auth backend.
const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_secs(2);

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// The mutable state owned by one logical storefront session.
#[derive(Debug, Default)]
pub struct Session {
    pub cart: Cart,
    pub wishlist: Wishlist,
}

/// Core application state: the catalog plus all live sessions.
pub struct AppState {
    /// Immutable product universe, seeded once at startup.
    pub catalog: Catalog,

    /// Per-session shopping state, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, Session>,

    /// Guard enforcing one in-flight auth submission at a time.
    pub submit_in_flight: AtomicBool,

    /// Mocked network round-trip time for auth submissions.
    pub submit_latency: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates the state with the built-in seed catalog.
    pub fn new() -> Self {
        Self::with_submit_latency(DEFAULT_SUBMIT_LATENCY)
    }

    /// Same as [`AppState::new`] but with a custom submit latency.
    /// Tests use this to avoid the two-second mock delay.
    pub fn with_submit_latency(submit_latency: Duration) -> Self {
        Self {
            catalog: Catalog::seeded(),
            sessions: DashMap::new(),
            submit_in_flight: AtomicBool::new(false),
            submit_latency,
        }
    }
}

/// Returns the provided `session_id` or mints a new uuid string when `None`.
///
/// This guarantees that every session operation works with a non-empty
/// identifier.
pub fn get_or_create_session_id(session_id: Option<String>) -> String {
    session_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}
