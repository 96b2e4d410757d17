//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::{AuthError, ValidationError};

use gk_shared::error_codes;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Stable machine-readable code for the error
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                error_codes::VALIDATION_ERROR
            }
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Storage { .. } | DomainError::Internal { .. } => {
                error_codes::INTERNAL_ERROR
            }
            DomainError::Auth(err) => err.error_code(),
        }
    }

    /// Whether the caller can correct the request and retry
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            DomainError::Storage { .. } | DomainError::Internal { .. }
        ) && !matches!(self, DomainError::Auth(AuthError::TransportFailure { .. }))
    }

    /// Shorthand used by repository implementations
    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
