//! Account repository trait.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its phone number
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError>;

    /// Check if an account exists for the phone number
    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError>;

    /// Create a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError::Auth(AuthError::AlreadyRegistered))` - Phone already taken
    /// * `Err(DomainError)` - Storage failure
    async fn create(&self, account: Account) -> Result<Account, DomainError>;
}
