//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, ValidationError};
use gk_shared::error_codes;

#[test]
fn test_rate_limited_message_hides_expiry() {
    let message = AuthError::RateLimited.to_string();
    assert!(message.contains("try again later"));
    assert!(!message.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_auth_error_codes() {
    assert_eq!(AuthError::RateLimited.error_code(), error_codes::RATE_LIMITED);
    assert_eq!(
        AuthError::InvalidCredential.error_code(),
        error_codes::INVALID_CREDENTIAL
    );
    assert_eq!(
        AuthError::TransportFailure {
            message: "timeout".to_string()
        }
        .error_code(),
        error_codes::TRANSPORT_FAILURE
    );
}

#[test]
fn test_domain_error_from_auth_error() {
    let error: DomainError = AuthError::InvalidCode.into();
    assert!(matches!(error, DomainError::Auth(AuthError::InvalidCode)));
    assert_eq!(error.error_code(), error_codes::INVALID_CODE);
    assert!(error.is_client_error());
}

#[test]
fn test_storage_error_is_not_client_error() {
    let error = DomainError::storage("connection reset");
    assert_eq!(error.error_code(), error_codes::INTERNAL_ERROR);
    assert!(!error.is_client_error());

    let transport: DomainError = AuthError::TransportFailure {
        message: "gateway down".to_string(),
    }
    .into();
    assert!(!transport.is_client_error());
}

#[test]
fn test_validation_error_message() {
    let error: DomainError = ValidationError::InvalidLength {
        field: "code".to_string(),
        expected: 6,
        actual: 4,
    }
    .into();
    assert_eq!(error.error_code(), error_codes::VALIDATION_ERROR);
    assert!(error.to_string().contains("expected: 6, actual: 4"));
}
