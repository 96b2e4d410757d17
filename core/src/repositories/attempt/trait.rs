//! Attempt repository trait backing the attempt ledger.
//!
//! One repository instance stores the attempts of one flow. Sign-up and
//! sign-in must be given separate instances (or separate tables).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::attempt::Attempt;
use crate::errors::DomainError;

/// Repository trait for Attempt persistence operations
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Append an attempt
    ///
    /// # Arguments
    /// * `attempt` - The attempt to store
    ///
    /// # Returns
    /// * `Ok(Attempt)` - The stored attempt
    /// * `Err(DomainError)` - Storage failure
    async fn create(&self, attempt: Attempt) -> Result<Attempt, DomainError>;

    /// Find failures not yet counted toward a ban
    ///
    /// Matches attempts where `(phone_number = phone OR ip = ip) AND
    /// succeeded = false AND consumed_by_ban = false`.
    ///
    /// # Arguments
    /// * `phone` - Phone number to match
    /// * `ip` - Client ip to match
    ///
    /// # Returns
    /// * `Ok(Vec<Attempt>)` - Matching attempts, in no particular order
    /// * `Err(DomainError)` - Storage failure
    async fn find_unconsumed_failures(
        &self,
        phone: &str,
        ip: &str,
    ) -> Result<Vec<Attempt>, DomainError>;

    /// Flip `consumed_by_ban` on the given attempts
    ///
    /// Only rows still unconsumed are flipped, so a repeated call is a no-op.
    ///
    /// # Returns
    /// * `Ok(n)` - Number of attempts that were actually flipped by this call
    /// * `Err(DomainError)` - Storage failure
    async fn mark_consumed(&self, ids: &[Uuid]) -> Result<u64, DomainError>;

    /// Find an attempt by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Attempt>, DomainError>;
}
