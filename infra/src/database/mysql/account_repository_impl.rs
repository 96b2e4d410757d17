//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use gk_core::domain::entities::Account;
use gk_core::errors::{AuthError, DomainError};
use gk_core::repositories::AccountRepository;

use super::{column, storage_error, uuid_column};

/// MySQL implementation of AccountRepository
///
/// `accounts.phone_number` carries a unique key; a violation on insert is
/// reported as `AlreadyRegistered`.
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        Ok(Account {
            id: uuid_column(row, "id")?,
            phone_number: column(row, "phone_number")?,
            username: column(row, "username")?,
            email: column(row, "email")?,
            first_name: column(row, "first_name")?,
            last_name: column(row, "last_name")?,
            password_hash: column(row, "password_hash")?,
            is_active: column(row, "is_active")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, phone_number, username, email, first_name, last_name,
                   password_hash, is_active, created_at, updated_at
            FROM accounts
            WHERE phone_number = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find account", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM accounts WHERE phone_number = ?) AS found";

        let row = sqlx::query(query)
            .bind(phone)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to check account existence", e))?;

        let found: i64 = row
            .try_get("found")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get found: {}", e) })?;

        Ok(found == 1)
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, phone_number, username, email, first_name, last_name,
                password_hash, is_active, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.phone_number)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.password_hash)
            .bind(account.is_active)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(account),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::AlreadyRegistered.into())
            }
            Err(e) => Err(storage_error("Failed to create account", e)),
        }
    }
}
