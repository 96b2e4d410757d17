//! Verification repository trait.

use async_trait::async_trait;

use crate::domain::entities::verification::VerificationRecord;
use crate::errors::DomainError;

/// Repository trait for VerificationRecord persistence operations
///
/// Records are keyed by phone number. There is at most one per phone.
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Insert the record, or overwrite the code of the existing one
    ///
    /// On conflict `last_code`, `last_sent_at`, `is_validated` and `updated_at`
    /// are replaced; `created_at` is kept.
    ///
    /// # Returns
    /// * `Ok(VerificationRecord)` - The record as stored
    /// * `Err(DomainError)` - Storage failure
    async fn upsert(&self, record: VerificationRecord) -> Result<VerificationRecord, DomainError>;

    /// Find the record for a phone number
    async fn find_by_phone(&self, phone: &str) -> Result<Option<VerificationRecord>, DomainError>;

    /// Atomically flip `is_validated` when `code` is the outstanding code
    ///
    /// Compare-and-set: the flip happens only if the record exists,
    /// `last_code == code` and `is_validated == false`.
    ///
    /// # Returns
    /// * `Ok(true)` - This call flipped the flag
    /// * `Ok(false)` - No match, or another caller already validated the code
    /// * `Err(DomainError)` - Storage failure
    async fn mark_validated_if_matches(&self, phone: &str, code: &str) -> Result<bool, DomainError>;
}
