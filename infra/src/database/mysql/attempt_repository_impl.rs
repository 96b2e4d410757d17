//! MySQL implementation of the AttemptRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use gk_core::domain::entities::{Attempt, FlowKind};
use gk_core::errors::DomainError;
use gk_core::repositories::AttemptRepository;

use super::{attempts_table, column, placeholders, storage_error, uuid_column};

/// MySQL implementation of AttemptRepository for one flow
pub struct MySqlAttemptRepository {
    pool: MySqlPool,
    table: &'static str,
}

impl MySqlAttemptRepository {
    /// Create a repository over the attempt table of `flow`
    pub fn new(pool: MySqlPool, flow: FlowKind) -> Self {
        Self {
            pool,
            table: attempts_table(flow),
        }
    }

    fn row_to_attempt(row: &sqlx::mysql::MySqlRow) -> Result<Attempt, DomainError> {
        Ok(Attempt {
            id: uuid_column(row, "id")?,
            phone_number: column(row, "phone_number")?,
            ip: column(row, "ip")?,
            succeeded: column(row, "succeeded")?,
            consumed_by_ban: column(row, "consumed_by_ban")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl AttemptRepository for MySqlAttemptRepository {
    async fn create(&self, attempt: Attempt) -> Result<Attempt, DomainError> {
        let query = format!(
            "INSERT INTO {} (id, phone_number, ip, succeeded, consumed_by_ban, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
            self.table
        );

        sqlx::query(&query)
            .bind(attempt.id.to_string())
            .bind(&attempt.phone_number)
            .bind(&attempt.ip)
            .bind(attempt.succeeded)
            .bind(attempt.consumed_by_ban)
            .bind(attempt.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to record attempt", e))?;

        Ok(attempt)
    }

    async fn find_unconsumed_failures(
        &self,
        phone: &str,
        ip: &str,
    ) -> Result<Vec<Attempt>, DomainError> {
        let query = format!(
            "SELECT id, phone_number, ip, succeeded, consumed_by_ban, created_at \
             FROM {} \
             WHERE (phone_number = ? OR ip = ?) \
                 AND succeeded = FALSE \
                 AND consumed_by_ban = FALSE",
            self.table
        );

        let rows = sqlx::query(&query)
            .bind(phone)
            .bind(ip)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find failed attempts", e))?;

        rows.iter().map(Self::row_to_attempt).collect()
    }

    async fn mark_consumed(&self, ids: &[Uuid]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let query = format!(
            "UPDATE {} SET consumed_by_ban = TRUE \
             WHERE consumed_by_ban = FALSE AND id IN ({})",
            self.table,
            placeholders(ids.len())
        );

        let mut statement = sqlx::query(&query);
        for id in ids {
            statement = statement.bind(id.to_string());
        }

        let result = statement
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to mark attempts consumed", e))?;

        Ok(result.rows_affected())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Attempt>, DomainError> {
        let query = format!(
            "SELECT id, phone_number, ip, succeeded, consumed_by_ban, created_at \
             FROM {} WHERE id = ? LIMIT 1",
            self.table
        );

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find attempt", e))?;

        row.as_ref().map(Self::row_to_attempt).transpose()
    }
}
