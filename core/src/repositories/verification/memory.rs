//! In-memory implementation of VerificationRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification::VerificationRecord;
use crate::errors::DomainError;

use super::trait_::VerificationRepository;

/// In-memory verification repository
#[derive(Clone, Default)]
pub struct InMemoryVerificationRepository {
    records: Arc<RwLock<HashMap<String, VerificationRecord>>>,
}

impl InMemoryVerificationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VerificationRepository for InMemoryVerificationRepository {
    async fn upsert(&self, record: VerificationRecord) -> Result<VerificationRecord, DomainError> {
        let mut records = self.records.write().await;
        let stored = match records.get_mut(&record.phone_number) {
            Some(existing) => {
                existing.reissue(record.last_code);
                existing.clone()
            }
            None => {
                records.insert(record.phone_number.clone(), record.clone());
                record
            }
        };
        Ok(stored)
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<VerificationRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(phone).cloned())
    }

    async fn mark_validated_if_matches(&self, phone: &str, code: &str) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(phone) {
            Some(record) if record.accepts(code) => {
                record.is_validated = true;
                record.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
