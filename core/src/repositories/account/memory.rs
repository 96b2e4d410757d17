//! In-memory implementation of AccountRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError};

use super::trait_::AccountRepository;

/// In-memory account repository keyed by phone number
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with an existing account
    pub fn with_account(account: Account) -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(account.phone_number.clone(), account);
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(phone).cloned())
    }

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.contains_key(phone))
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.phone_number) {
            return Err(DomainError::Auth(AuthError::AlreadyRegistered));
        }
        accounts.insert(account.phone_number.clone(), account.clone());
        Ok(account)
    }
}
