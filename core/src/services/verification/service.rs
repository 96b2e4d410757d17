//! Verification registry implementation

use std::sync::Arc;

use rand::{rngs::OsRng, Rng};

use gk_shared::phone::mask_phone_number;

use crate::domain::entities::verification::VerificationRecord;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::VerificationRepository;
use crate::services::ban::BanPolicy;
use crate::services::vault::PreRegistrationVault;

use super::config::VerificationConfig;
use super::traits::SmsSender;
use super::types::SentCode;

/// Holds the single outstanding code per phone and validates submitted codes
pub struct VerificationRegistry {
    records: Arc<dyn VerificationRepository>,
    vault: Arc<PreRegistrationVault>,
    ban_policy: Arc<BanPolicy>,
    sms_sender: Arc<dyn SmsSender>,
    config: VerificationConfig,
}

impl VerificationRegistry {
    /// Create a new verification registry
    ///
    /// # Arguments
    ///
    /// * `records` - Verification record storage
    /// * `vault` - Vault that mints registration credentials
    /// * `ban_policy` - Sign-up ban policy; its ledger records every attempt
    /// * `sms_sender` - SMS transport
    /// * `config` - Registry configuration
    pub fn new(
        records: Arc<dyn VerificationRepository>,
        vault: Arc<PreRegistrationVault>,
        ban_policy: Arc<BanPolicy>,
        sms_sender: Arc<dyn SmsSender>,
        config: VerificationConfig,
    ) -> Self {
        Self {
            records,
            vault,
            ban_policy,
            sms_sender,
            config,
        }
    }

    pub fn code_length(&self) -> usize {
        self.config.code_length
    }

    /// Generate, store and send a new code for `phone`
    ///
    /// The request is recorded as a failed sign-up attempt whatever happens
    /// to the send. The stored code replaces any outstanding one and a new
    /// verification round begins.
    ///
    /// # Returns
    ///
    /// * `Ok(SentCode)` - The code was stored and handed to the transport
    /// * `Err(DomainError::Auth(AuthError::TransportFailure))` - The send failed
    pub async fn issue_code(&self, phone: &str, ip: &str) -> DomainResult<SentCode> {
        let code = Self::generate_code(self.config.code_length);

        self.ban_policy
            .ledger()
            .record_attempt(phone, ip, false)
            .await?;

        let record = self
            .records
            .upsert(VerificationRecord::new(phone, code.clone()))
            .await?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            ip = ip,
            event = "verification_code_generated",
            "Generated new verification code"
        );

        let message_id = self
            .sms_sender
            .send_code(phone, &code)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "verification_code_send_failed",
                    "Failed to send verification code"
                );
                DomainError::Auth(AuthError::TransportFailure { message: e })
            })?;

        Ok(SentCode {
            code,
            message_id,
            sent_at: record.last_sent_at,
        })
    }

    /// Exchange a code for a registration credential id
    ///
    /// The `is_validated` flip is a compare-and-set performed before the
    /// credential is minted, so concurrent confirms of the same code mint
    /// at most one credential.
    pub async fn confirm_code(&self, phone: &str, code: &str, ip: &str) -> DomainResult<String> {
        if self.ban_policy.is_banned(phone, ip).await? {
            return Err(AuthError::RateLimited.into());
        }

        let ledger = self.ban_policy.ledger();

        if !self.records.mark_validated_if_matches(phone, code).await? {
            ledger.record_attempt(phone, ip, false).await?;
            tracing::warn!(
                phone = %mask_phone_number(phone),
                ip = ip,
                event = "verification_code_rejected",
                "Invalid verification code"
            );
            return Err(AuthError::InvalidCode.into());
        }

        let credential_id = self.vault.mint(phone).await?;
        ledger.record_attempt(phone, ip, true).await?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            ip = ip,
            event = "verification_code_confirmed",
            "Phone number verified"
        );

        Ok(credential_id)
    }

    /// Generate a numeric code of `length` digits using the OS CSPRNG
    pub fn generate_code(length: usize) -> String {
        let upper = 10u64.saturating_pow(length as u32);
        let value = OsRng.gen_range(0..upper);
        format!("{:0width$}", value, width = length)
    }
}
