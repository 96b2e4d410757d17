//! Attempt ledger service implementation

use std::sync::Arc;

use uuid::Uuid;

use gk_shared::phone::mask_phone_number;

use crate::domain::entities::attempt::{Attempt, FlowKind};
use crate::errors::DomainResult;
use crate::repositories::AttemptRepository;

/// Unconsumed failures matched for a (phone, ip) pair
///
/// A finite snapshot taken at query time. Iterating consumes it; callers
/// that only need the count use [`FailureSet::len`].
#[derive(Debug, Clone, Default)]
pub struct FailureSet {
    attempts: Vec<Attempt>,
}

impl FailureSet {
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    /// Ids of the attempts in the set
    pub fn ids(&self) -> Vec<Uuid> {
        self.attempts.iter().map(|a| a.id).collect()
    }
}

impl From<Vec<Attempt>> for FailureSet {
    fn from(attempts: Vec<Attempt>) -> Self {
        Self { attempts }
    }
}

impl IntoIterator for FailureSet {
    type Item = Attempt;
    type IntoIter = std::vec::IntoIter<Attempt>;

    fn into_iter(self) -> Self::IntoIter {
        self.attempts.into_iter()
    }
}

/// Ledger of attempts for a single flow
pub struct AttemptLedger {
    repository: Arc<dyn AttemptRepository>,
    flow: FlowKind,
}

impl AttemptLedger {
    /// Create a ledger for `flow` over its own attempt storage
    pub fn new(repository: Arc<dyn AttemptRepository>, flow: FlowKind) -> Self {
        Self { repository, flow }
    }

    /// The flow this ledger records
    pub fn flow(&self) -> FlowKind {
        self.flow
    }

    /// Append an attempt
    ///
    /// # Arguments
    ///
    /// * `phone` - Phone number the attempt was made for
    /// * `ip` - Client ip
    /// * `succeeded` - Outcome of the attempt
    pub async fn record_attempt(&self, phone: &str, ip: &str, succeeded: bool) -> DomainResult<Attempt> {
        let attempt = self
            .repository
            .create(Attempt::new(phone, ip, succeeded))
            .await?;

        tracing::debug!(
            flow = %self.flow,
            phone = %mask_phone_number(phone),
            ip = ip,
            succeeded = succeeded,
            event = "attempt_recorded",
            "Recorded attempt"
        );

        Ok(attempt)
    }

    /// Failures matching the phone OR the ip that no ban has counted yet
    pub async fn unconsumed_failures(&self, phone: &str, ip: &str) -> DomainResult<FailureSet> {
        let attempts = self.repository.find_unconsumed_failures(phone, ip).await?;
        Ok(FailureSet::from(attempts))
    }

    /// Mark every attempt in `failures` as counted toward a ban
    ///
    /// Idempotent. Returns how many attempts this call actually flipped, so a
    /// second call with the same set returns 0.
    pub async fn mark_consumed(&self, failures: &FailureSet) -> DomainResult<u64> {
        if failures.is_empty() {
            return Ok(0);
        }
        self.repository.mark_consumed(&failures.ids()).await
    }
}
