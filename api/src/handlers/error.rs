//! Mapping of domain errors to HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use gk_core::errors::{AuthError, DomainError};
use gk_shared::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Error returned by every handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request data")]
    Validation(#[from] ValidationErrors),

    /// Malformed body, wrong content type, oversized payload
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn message(&self) -> String {
        match self {
            ApiError::Domain(err) if err.is_client_error() => err.to_string(),
            ApiError::Domain(DomainError::Auth(AuthError::TransportFailure { .. })) => {
                "Failed to send verification code, please try again".to_string()
            }
            ApiError::Domain(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Domain(err) => err.error_code(),
            ApiError::Validation(_) | ApiError::BadRequest(_) => error_codes::VALIDATION_ERROR,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::Auth(err)) => match err {
                AuthError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                AuthError::AlreadyRegistered => StatusCode::CONFLICT,
                AuthError::InvalidCode | AuthError::InvalidCredential => StatusCode::BAD_REQUEST,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::TransportFailure { .. } => StatusCode::SERVICE_UNAVAILABLE,
            },
            ApiError::Domain(DomainError::Validation { .. })
            | ApiError::Domain(DomainError::ValidationErr(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Storage { .. })
            | ApiError::Domain(DomainError::Internal { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(event = "request_failed", status = status.as_u16(), error = %self, "Request failed");
        }

        let mut body = ErrorResponse::new(self.code(), self.message());
        if let ApiError::Validation(errors) = self {
            for (field, field_errors) in errors.field_errors() {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                body = body.add_detail(field, messages);
            }
        }

        HttpResponse::build(status).json(body)
    }
}
