//! In-memory implementation of RegistrationRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::registration::RegistrationCredential;
use crate::errors::DomainError;

use super::trait_::RegistrationRepository;

/// In-memory registration credential repository
#[derive(Clone, Default)]
pub struct InMemoryRegistrationRepository {
    credentials: Arc<RwLock<HashMap<String, RegistrationCredential>>>,
}

impl InMemoryRegistrationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Credentials bound to a phone that have not been consumed
    pub async fn outstanding_for(&self, phone: &str) -> Vec<RegistrationCredential> {
        let credentials = self.credentials.read().await;
        credentials
            .values()
            .filter(|c| c.phone_number == phone && !c.is_consumed)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn create(
        &self,
        credential: RegistrationCredential,
    ) -> Result<RegistrationCredential, DomainError> {
        let mut credentials = self.credentials.write().await;
        if credentials.contains_key(&credential.credential_id) {
            return Err(DomainError::storage("duplicate registration credential id"));
        }
        credentials.insert(credential.credential_id.clone(), credential.clone());
        Ok(credential)
    }

    async fn find_by_id(
        &self,
        credential_id: &str,
    ) -> Result<Option<RegistrationCredential>, DomainError> {
        let credentials = self.credentials.read().await;
        Ok(credentials.get(credential_id).cloned())
    }

    async fn consume(&self, credential_id: &str) -> Result<Option<String>, DomainError> {
        let mut credentials = self.credentials.write().await;
        match credentials.get_mut(credential_id) {
            Some(credential) if !credential.is_consumed => {
                credential.is_consumed = true;
                Ok(Some(credential.phone_number.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn retire_outstanding(&self, phone: &str) -> Result<u64, DomainError> {
        let mut credentials = self.credentials.write().await;
        let mut retired = 0;
        for credential in credentials
            .values_mut()
            .filter(|c| c.phone_number == phone && !c.is_consumed)
        {
            credential.is_consumed = true;
            retired += 1;
        }
        Ok(retired)
    }
}
