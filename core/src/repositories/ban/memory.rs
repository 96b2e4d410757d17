//! In-memory implementation of BanRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::ban::Ban;
use crate::errors::DomainError;

use super::trait_::BanRepository;

/// In-memory ban repository
#[derive(Clone, Default)]
pub struct InMemoryBanRepository {
    bans: Arc<RwLock<Vec<Ban>>>,
}

impl InMemoryBanRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// All bans ever minted, active or not
    pub async fn all(&self) -> Vec<Ban> {
        self.bans.read().await.clone()
    }
}

#[async_trait]
impl BanRepository for InMemoryBanRepository {
    async fn create(&self, ban: Ban) -> Result<Ban, DomainError> {
        let mut bans = self.bans.write().await;
        bans.push(ban.clone());
        Ok(ban)
    }

    async fn find_active(
        &self,
        phone: &str,
        ip: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Ban>, DomainError> {
        let bans = self.bans.read().await;
        Ok(bans
            .iter()
            .filter(|b| b.matches(phone, ip) && b.is_active_at(now))
            .max_by_key(|b| b.banned_until)
            .cloned())
    }
}
