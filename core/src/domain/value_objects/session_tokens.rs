//! Session tokens returned by a successful sign-in.

use serde::{Deserialize, Serialize};

/// Opaque access/refresh pair produced by the credential issuer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    /// Short-lived token for API authentication
    pub access: String,

    /// Longer-lived token for obtaining new access tokens
    pub refresh: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl SessionTokens {
    pub fn new(access: String, refresh: String, expires_in: i64) -> Self {
        Self {
            access,
            refresh,
            expires_in,
        }
    }
}
