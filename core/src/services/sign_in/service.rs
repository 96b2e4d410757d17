//! Sign-in guard implementation

use std::sync::Arc;

use gk_shared::phone::mask_phone_number;

use crate::domain::value_objects::SessionTokens;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::services::ban::BanPolicy;
use crate::services::credentials::CredentialIssuer;

use super::config::SignInGuardConfig;

/// Wraps the credential issuer with the sign-in ban policy
pub struct SignInGuard {
    ban_policy: Arc<BanPolicy>,
    issuer: Arc<dyn CredentialIssuer>,
    config: SignInGuardConfig,
}

impl SignInGuard {
    pub fn new(
        ban_policy: Arc<BanPolicy>,
        issuer: Arc<dyn CredentialIssuer>,
        config: SignInGuardConfig,
    ) -> Self {
        Self {
            ban_policy,
            issuer,
            config,
        }
    }

    /// Exchange a phone and password for session tokens
    ///
    /// # Returns
    ///
    /// * `Ok(SessionTokens)` - Issued by the credential issuer
    /// * `Err(AuthError::RateLimited)` - The phone or ip is banned; the issuer is not called
    /// * `Err(AuthError::InvalidCredentials)` - Wrong password or unknown account;
    ///   a failed sign-in attempt is recorded
    pub async fn sign_in(&self, phone: &str, password: &str, ip: &str) -> DomainResult<SessionTokens> {
        if self.ban_policy.is_banned(phone, ip).await? {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                ip = ip,
                event = "sign_in_rate_limited",
                "Sign-in denied"
            );
            return Err(AuthError::RateLimited.into());
        }

        let ledger = self.ban_policy.ledger();
        match self.issuer.issue(phone, password).await {
            Ok(tokens) => {
                if self.config.record_success {
                    ledger.record_attempt(phone, ip, true).await?;
                }
                tracing::info!(
                    phone = %mask_phone_number(phone),
                    ip = ip,
                    event = "sign_in_succeeded",
                    "Signed in"
                );
                Ok(tokens)
            }
            Err(DomainError::Auth(AuthError::InvalidCredentials)) => {
                ledger.record_attempt(phone, ip, false).await?;
                tracing::warn!(
                    phone = %mask_phone_number(phone),
                    ip = ip,
                    event = "sign_in_failed",
                    "Invalid sign-in credentials"
                );
                Err(AuthError::InvalidCredentials.into())
            }
            Err(e) => Err(e),
        }
    }
}
