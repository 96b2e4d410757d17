//! In-memory implementation of AttemptRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::attempt::Attempt;
use crate::errors::DomainError;

use super::trait_::AttemptRepository;

/// In-memory attempt repository
#[derive(Clone)]
pub struct InMemoryAttemptRepository {
    attempts: Arc<RwLock<HashMap<Uuid, Attempt>>>,
}

impl InMemoryAttemptRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored attempts
    pub async fn len(&self) -> usize {
        self.attempts.read().await.len()
    }

    /// Whether no attempt has been stored
    pub async fn is_empty(&self) -> bool {
        self.attempts.read().await.is_empty()
    }

    /// All attempts recorded for a phone number
    pub async fn find_by_phone(&self, phone: &str) -> Vec<Attempt> {
        let attempts = self.attempts.read().await;
        attempts
            .values()
            .filter(|a| a.phone_number == phone)
            .cloned()
            .collect()
    }
}

impl Default for InMemoryAttemptRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttemptRepository for InMemoryAttemptRepository {
    async fn create(&self, attempt: Attempt) -> Result<Attempt, DomainError> {
        let mut attempts = self.attempts.write().await;
        attempts.insert(attempt.id, attempt.clone());
        Ok(attempt)
    }

    async fn find_unconsumed_failures(
        &self,
        phone: &str,
        ip: &str,
    ) -> Result<Vec<Attempt>, DomainError> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .values()
            .filter(|a| a.matches(phone, ip) && a.is_unconsumed_failure())
            .cloned()
            .collect())
    }

    async fn mark_consumed(&self, ids: &[Uuid]) -> Result<u64, DomainError> {
        let mut attempts = self.attempts.write().await;
        let mut flipped = 0;
        for id in ids {
            if let Some(attempt) = attempts.get_mut(id) {
                if !attempt.consumed_by_ban {
                    attempt.consumed_by_ban = true;
                    flipped += 1;
                }
            }
        }
        Ok(flipped)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Attempt>, DomainError> {
        let attempts = self.attempts.read().await;
        Ok(attempts.get(&id).cloned())
    }
}
