//! Registration credential repository trait.

use async_trait::async_trait;

use crate::domain::entities::registration::RegistrationCredential;
use crate::errors::DomainError;

/// Repository trait for RegistrationCredential persistence operations
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Store a freshly minted credential
    ///
    /// # Returns
    /// * `Ok(RegistrationCredential)` - The stored credential
    /// * `Err(DomainError)` - Storage failure, including a duplicate id
    async fn create(
        &self,
        credential: RegistrationCredential,
    ) -> Result<RegistrationCredential, DomainError>;

    /// Find a credential by id, consumed or not
    async fn find_by_id(
        &self,
        credential_id: &str,
    ) -> Result<Option<RegistrationCredential>, DomainError>;

    /// Atomically consume an unconsumed credential
    ///
    /// Compare-and-set on `is_consumed`: of any number of concurrent callers
    /// with the same id, at most one receives the phone number.
    ///
    /// # Returns
    /// * `Ok(Some(phone))` - This call consumed the credential
    /// * `Ok(None)` - Unknown id or already consumed
    /// * `Err(DomainError)` - Storage failure
    async fn consume(&self, credential_id: &str) -> Result<Option<String>, DomainError>;

    /// Consume every outstanding credential bound to a phone number
    ///
    /// # Returns
    /// * `Ok(n)` - Number of credentials retired by this call
    async fn retire_outstanding(&self, phone: &str) -> Result<u64, DomainError>;
}
