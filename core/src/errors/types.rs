//! Error types for verification, registration and sign-in
//!
//! None of these messages carry the expiry of a ban. A throttled caller only
//! learns that it is throttled.

use gk_shared::error_codes;
use thiserror::Error;

/// Errors surfaced by the registration and sign-in flows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Too many failed attempts. Please try again later")]
    RateLimited,

    #[error("An account with this phone number already exists")]
    AlreadyRegistered,

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Invalid or already used registration id")]
    InvalidCredential,

    #[error("No active account found with the given credentials")]
    InvalidCredentials,

    #[error("Failed to send verification code: {message}")]
    TransportFailure { message: String },
}

impl AuthError {
    /// Stable machine-readable code for the error
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::RateLimited => error_codes::RATE_LIMITED,
            AuthError::AlreadyRegistered => error_codes::ALREADY_REGISTERED,
            AuthError::InvalidCode => error_codes::INVALID_CODE,
            AuthError::InvalidCredential => error_codes::INVALID_CREDENTIAL,
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::TransportFailure { .. } => error_codes::TRANSPORT_FAILURE,
        }
    }
}

/// Validation errors for submitted fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length for field: {field} (expected: {expected}, actual: {actual})")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },
}
