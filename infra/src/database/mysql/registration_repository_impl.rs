//! MySQL implementation of the RegistrationRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use gk_core::domain::entities::RegistrationCredential;
use gk_core::errors::DomainError;
use gk_core::repositories::RegistrationRepository;

use super::{column, storage_error};

/// MySQL implementation of RegistrationRepository
pub struct MySqlRegistrationRepository {
    pool: MySqlPool,
}

impl MySqlRegistrationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_credential(
        row: &sqlx::mysql::MySqlRow,
    ) -> Result<RegistrationCredential, DomainError> {
        Ok(RegistrationCredential {
            credential_id: column(row, "credential_id")?,
            phone_number: column(row, "phone_number")?,
            started_at: column::<DateTime<Utc>>(row, "started_at")?,
            is_consumed: column(row, "is_consumed")?,
        })
    }
}

#[async_trait]
impl RegistrationRepository for MySqlRegistrationRepository {
    async fn create(
        &self,
        credential: RegistrationCredential,
    ) -> Result<RegistrationCredential, DomainError> {
        let query = r#"
            INSERT INTO registration_credentials (
                credential_id, phone_number, started_at, is_consumed
            ) VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&credential.credential_id)
            .bind(&credential.phone_number)
            .bind(credential.started_at)
            .bind(credential.is_consumed)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to store registration credential", e))?;

        Ok(credential)
    }

    async fn find_by_id(
        &self,
        credential_id: &str,
    ) -> Result<Option<RegistrationCredential>, DomainError> {
        let query = r#"
            SELECT credential_id, phone_number, started_at, is_consumed
            FROM registration_credentials
            WHERE credential_id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(credential_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find registration credential", e))?;

        row.as_ref().map(Self::row_to_credential).transpose()
    }

    async fn consume(&self, credential_id: &str) -> Result<Option<String>, DomainError> {
        let update = r#"
            UPDATE registration_credentials
            SET is_consumed = TRUE
            WHERE credential_id = ? AND is_consumed = FALSE
        "#;

        let result = sqlx::query(update)
            .bind(credential_id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to consume registration credential", e))?;

        if result.rows_affected() != 1 {
            return Ok(None);
        }

        // The phone number never changes after mint, so reading it back is safe.
        Ok(self
            .find_by_id(credential_id)
            .await?
            .map(|credential| credential.phone_number))
    }

    async fn retire_outstanding(&self, phone: &str) -> Result<u64, DomainError> {
        let query = r#"
            UPDATE registration_credentials
            SET is_consumed = TRUE
            WHERE phone_number = ? AND is_consumed = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(phone)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to retire registration credentials", e))?;

        Ok(result.rows_affected())
    }
}
