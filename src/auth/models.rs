//! Auth Domain Models
//!
//! Data structures for the credential/profile form, the validation error
//! map, and the simulated submission outcome.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which variant of the form is active. Signup-only fields are validated
/// only in `SignUp` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// The raw form data as entered by the user. All fields default to empty
/// so a partially filled form still deserializes and validates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub confirm_password: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub accept_terms: bool,
}

/// Field name -> error message. An empty map means the form is valid.
pub type FieldErrors = HashMap<&'static str, String>;

/// Input for the validate and submit endpoints.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub mode: AuthMode,
    pub form: SignupForm,
}

/// Response for the validate endpoint.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: FieldErrors,
}

/// Response for a completed submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: String,
    pub message: String,
}

/// Failure modes of the simulated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A submission is already being processed for this server
    AlreadyInFlight,

    /// Generic catch-all mirroring a failed backend call
    Failed,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::AlreadyInFlight => {
                write!(f, "A submission is already in progress. Please wait.")
            }
            SubmitError::Failed => write!(f, "Something went wrong. Please try again."),
        }
    }
}

impl std::error::Error for SubmitError {}

/// The success message shown after the mocked backend call resolves.
pub fn success_message(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::SignIn => "Login successful! Welcome back.",
        AuthMode::SignUp => {
            "Account created successfully! Please check your email to verify your account."
        }
    }
}
