//! MySQL implementation of the VerificationRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use gk_core::domain::entities::VerificationRecord;
use gk_core::errors::DomainError;
use gk_core::repositories::VerificationRepository;

use super::{column, storage_error};

/// MySQL implementation of VerificationRepository
///
/// `phone_number` is the primary key, so an upsert overwrites the previous code.
pub struct MySqlVerificationRepository {
    pool: MySqlPool,
}

impl MySqlVerificationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<VerificationRecord, DomainError> {
        Ok(VerificationRecord {
            phone_number: column(row, "phone_number")?,
            last_code: column(row, "last_code")?,
            last_sent_at: column::<DateTime<Utc>>(row, "last_sent_at")?,
            is_validated: column(row, "is_validated")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl VerificationRepository for MySqlVerificationRepository {
    async fn upsert(&self, record: VerificationRecord) -> Result<VerificationRecord, DomainError> {
        let query = r#"
            INSERT INTO verification_records (
                phone_number, last_code, last_sent_at, is_validated, created_at, updated_at
            ) VALUES (?, ?, ?, FALSE, ?, ?)
            ON DUPLICATE KEY UPDATE
                last_code = VALUES(last_code),
                last_sent_at = VALUES(last_sent_at),
                is_validated = FALSE,
                updated_at = VALUES(updated_at)
        "#;

        sqlx::query(query)
            .bind(&record.phone_number)
            .bind(&record.last_code)
            .bind(record.last_sent_at)
            .bind(record.created_at)
            .bind(record.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to store verification code", e))?;

        self.find_by_phone(&record.phone_number)
            .await?
            .ok_or_else(|| DomainError::storage("Verification record vanished after upsert"))
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<VerificationRecord>, DomainError> {
        let query = r#"
            SELECT phone_number, last_code, last_sent_at, is_validated, created_at, updated_at
            FROM verification_records
            WHERE phone_number = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find verification record", e))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn mark_validated_if_matches(&self, phone: &str, code: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE verification_records
            SET is_validated = TRUE, updated_at = ?
            WHERE phone_number = ? AND last_code = ? AND is_validated = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(phone)
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to validate code", e))?;

        Ok(result.rows_affected() == 1)
    }
}
