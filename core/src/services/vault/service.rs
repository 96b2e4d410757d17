//! Pre-registration vault implementation

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::{rngs::OsRng, RngCore};

use gk_shared::phone::mask_phone_number;

use crate::domain::entities::registration::RegistrationCredential;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::RegistrationRepository;

use super::config::VaultConfig;

/// Issues and redeems one-time registration credentials
pub struct PreRegistrationVault {
    repository: Arc<dyn RegistrationRepository>,
    config: VaultConfig,
}

impl PreRegistrationVault {
    pub fn new(repository: Arc<dyn RegistrationRepository>, config: VaultConfig) -> Self {
        Self { repository, config }
    }

    /// Mint a credential bound to `phone`
    ///
    /// Any credential still outstanding for the phone is retired first, so a
    /// phone never holds more than one redeemable credential.
    ///
    /// # Returns
    ///
    /// The credential id to hand to the client
    pub async fn mint(&self, phone: &str) -> DomainResult<String> {
        let retired = self.repository.retire_outstanding(phone).await?;
        if retired > 0 {
            tracing::info!(
                phone = %mask_phone_number(phone),
                retired = retired,
                event = "registration_credential_retired",
                "Retired outstanding registration credentials"
            );
        }

        let credential_id = self.generate_credential_id();
        self.repository
            .create(RegistrationCredential::new(credential_id.clone(), phone))
            .await?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            event = "registration_credential_minted",
            "Minted registration credential"
        );

        Ok(credential_id)
    }

    /// Redeem a credential, returning the phone number it is bound to
    ///
    /// Exactly one caller can redeem a given id. Unknown or already consumed
    /// ids fail with `InvalidCredential`.
    pub async fn consume(&self, credential_id: &str) -> DomainResult<String> {
        match self.repository.consume(credential_id).await? {
            Some(phone) => {
                tracing::info!(
                    phone = %mask_phone_number(&phone),
                    event = "registration_credential_consumed",
                    "Consumed registration credential"
                );
                Ok(phone)
            }
            None => {
                tracing::warn!(
                    event = "registration_credential_rejected",
                    "Unknown or already consumed registration credential"
                );
                Err(AuthError::InvalidCredential.into())
            }
        }
    }

    /// Random URL-safe token from the OS CSPRNG
    fn generate_credential_id(&self) -> String {
        let mut bytes = vec![0u8; self.config.credential_bytes];
        OsRng.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}
