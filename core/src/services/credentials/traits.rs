//! Credential issuer trait consumed by registration and sign-in

use async_trait::async_trait;

use crate::domain::value_objects::SessionTokens;
use crate::errors::DomainResult;

/// External auth/session capability
///
/// Registration uses it to hash the password of a new account; sign-in
/// uses it to exchange a phone and password for session tokens.
/// Implementations must keep password hashing off the async workers.
#[async_trait]
pub trait CredentialIssuer: Send + Sync {
    /// Hash a raw password for storage
    async fn hash_password(&self, password: &str) -> DomainResult<String>;

    /// Issue session tokens for a phone and password
    ///
    /// # Returns
    ///
    /// * `Ok(SessionTokens)` - The password matches an active account
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Unknown
    ///   account, inactive account or wrong password
    async fn issue(&self, phone: &str, password: &str) -> DomainResult<SessionTokens>;

    /// Exchange a refresh token for a new access token
    ///
    /// The returned pair carries the same refresh token.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionTokens)` - The token is a valid refresh token of an
    ///   active account
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Malformed,
    ///   expired or access token, or the account is gone or inactive
    async fn refresh(&self, refresh_token: &str) -> DomainResult<SessionTokens>;
}
