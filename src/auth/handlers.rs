//! REST API handlers for the auth form
//!
//! Validation is exposed on its own so the UI can re-check fields as the
//! user types; submission runs validation first and then models the
//! network round-trip with a fixed delay.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use serde_json::json;
use tracing::info;

use super::models::{success_message, AuthRequest, SubmitError, SubmitResponse, ValidateResponse};
use super::validator::validate;
use crate::shop::SharedState;

/// Creates routes for auth operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/auth/validate", post(validate_form))
        .route("/auth/submit", post(submit_form))
}

/// Endpoint: POST /auth/validate
/// Runs the field rules and returns the collected error map.
async fn validate_form(Json(payload): Json<AuthRequest>) -> impl IntoResponse {
    let errors = validate(&payload.form, payload.mode);
    Json(ValidateResponse {
        valid: errors.is_empty(),
        errors,
    })
}

/// Endpoint: POST /auth/submit
/// Validates, then performs the simulated backend call. Only one
/// submission may be in flight at a time; the UI disables the form while
/// waiting, and a concurrent request is answered with 409.
async fn submit_form(
    State(state): State<SharedState>,
    Json(payload): Json<AuthRequest>,
) -> impl IntoResponse {
    let errors = validate(&payload.form, payload.mode);
    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "status": "invalid", "errors": errors })),
        )
            .into_response();
    }

    let _guard = match InFlightGuard::acquire(&state.submit_in_flight) {
        Some(guard) => guard,
        None => {
            let err = SubmitError::AlreadyInFlight;
            return (
                StatusCode::CONFLICT,
                Json(json!({ "status": "error", "message": err.to_string() })),
            )
                .into_response();
        }
    };

    // Simulated network round-trip. No partial state is observable while
    // this is pending.
    tokio::time::sleep(state.submit_latency).await;

    info!("auth submit resolved for {:?} mode", payload.mode);

    Json(SubmitResponse {
        status: "ok".to_string(),
        message: success_message(payload.mode).to_string(),
    })
    .into_response()
}

/// Holds the in-flight flag for the duration of one submission and
/// releases it on drop, including when the request future is cancelled.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
