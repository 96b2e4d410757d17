//! Ban repository trait backing the ban policy.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::ban::Ban;
use crate::errors::DomainError;

/// Repository trait for Ban persistence operations
///
/// Bans are insert-only. One repository instance stores the bans of one flow.
#[async_trait]
pub trait BanRepository: Send + Sync {
    /// Store a new ban
    async fn create(&self, ban: Ban) -> Result<Ban, DomainError>;

    /// Find a ban active at `now` matching the phone number OR the ip
    ///
    /// # Returns
    /// * `Ok(Some(Ban))` - An active ban exists (the latest-ending one)
    /// * `Ok(None)` - Neither the phone nor the ip is banned
    /// * `Err(DomainError)` - Storage failure
    async fn find_active(
        &self,
        phone: &str,
        ip: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Ban>, DomainError>;
}
