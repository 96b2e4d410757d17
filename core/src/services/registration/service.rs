//! Registration flow implementation

use std::sync::Arc;

use gk_shared::phone::mask_phone_number;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::ban::BanPolicy;
use crate::services::credentials::CredentialIssuer;
use crate::services::vault::PreRegistrationVault;
use crate::services::verification::{SentCode, VerificationRegistry};

use super::types::NewAccount;

/// Three-step sign-up: request a code, confirm it, complete the account
pub struct RegistrationFlow {
    ban_policy: Arc<BanPolicy>,
    registry: Arc<VerificationRegistry>,
    vault: Arc<PreRegistrationVault>,
    accounts: Arc<dyn AccountRepository>,
    issuer: Arc<dyn CredentialIssuer>,
}

impl RegistrationFlow {
    /// Create a new registration flow
    ///
    /// # Arguments
    ///
    /// * `ban_policy` - Sign-up ban policy (the one the registry uses)
    /// * `registry` - Verification registry
    /// * `vault` - Pre-registration vault
    /// * `accounts` - Account storage
    /// * `issuer` - Credential issuer used to hash passwords
    pub fn new(
        ban_policy: Arc<BanPolicy>,
        registry: Arc<VerificationRegistry>,
        vault: Arc<PreRegistrationVault>,
        accounts: Arc<dyn AccountRepository>,
        issuer: Arc<dyn CredentialIssuer>,
    ) -> Self {
        Self {
            ban_policy,
            registry,
            vault,
            accounts,
            issuer,
        }
    }

    /// Step 1: send a verification code
    ///
    /// # Returns
    ///
    /// * `Err(AuthError::RateLimited)` - The phone or ip is banned
    /// * `Err(AuthError::AlreadyRegistered)` - The phone already has an account
    /// * `Err(AuthError::TransportFailure)` - The SMS could not be sent
    pub async fn request_code(&self, phone: &str, ip: &str) -> DomainResult<SentCode> {
        if self.ban_policy.is_banned(phone, ip).await? {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                ip = ip,
                event = "sign_up_rate_limited",
                "Code request denied"
            );
            return Err(AuthError::RateLimited.into());
        }

        if self.accounts.exists_by_phone(phone).await? {
            return Err(AuthError::AlreadyRegistered.into());
        }

        self.registry.issue_code(phone, ip).await
    }

    /// Step 2: exchange the code for a registration credential id
    ///
    /// Codes that are not exactly `code_length` digits are rejected as a
    /// validation error before any attempt is recorded.
    pub async fn confirm_code(&self, phone: &str, code: &str, ip: &str) -> DomainResult<String> {
        let expected = self.registry.code_length();
        if code.len() != expected {
            return Err(ValidationError::InvalidLength {
                field: "code".to_string(),
                expected,
                actual: code.len(),
            }
            .into());
        }
        if !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "code".to_string(),
            }
            .into());
        }

        self.registry.confirm_code(phone, code, ip).await
    }

    /// Step 3: redeem the credential and create the account
    ///
    /// The account is bound to the phone number the credential was minted
    /// for, never to a phone number supplied by the client.
    pub async fn complete_registration(
        &self,
        credential_id: &str,
        fields: NewAccount,
    ) -> DomainResult<Account> {
        fields.validate()?;

        // hash first so only the insert can fail after the credential is spent
        let password_hash = self.issuer.hash_password(&fields.password).await?;
        let phone = self.vault.consume(credential_id).await?;
        let account = self
            .accounts
            .create(Account::new(phone, fields.profile, password_hash))
            .await?;

        tracing::info!(
            phone = %mask_phone_number(&account.phone_number),
            account_id = %account.id,
            event = "account_registered",
            "Account created"
        );

        Ok(account)
    }

    /// Whether an account exists for the phone number
    pub async fn account_exists(&self, phone: &str) -> DomainResult<bool> {
        self.accounts.exists_by_phone(phone).await
    }
}
