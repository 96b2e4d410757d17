//! MySQL implementation of the BanRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use gk_core::domain::entities::{Ban, FlowKind};
use gk_core::errors::DomainError;
use gk_core::repositories::BanRepository;

use super::{bans_table, column, storage_error, uuid_column};

/// MySQL implementation of BanRepository for one flow
///
/// Bans are insert-only; there is no update or delete.
pub struct MySqlBanRepository {
    pool: MySqlPool,
    table: &'static str,
}

impl MySqlBanRepository {
    pub fn new(pool: MySqlPool, flow: FlowKind) -> Self {
        Self {
            pool,
            table: bans_table(flow),
        }
    }

    fn row_to_ban(row: &sqlx::mysql::MySqlRow) -> Result<Ban, DomainError> {
        Ok(Ban {
            id: uuid_column(row, "id")?,
            phone_number: column(row, "phone_number")?,
            ip: column(row, "ip")?,
            banned_until: column::<Option<DateTime<Utc>>>(row, "banned_until")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl BanRepository for MySqlBanRepository {
    async fn create(&self, ban: Ban) -> Result<Ban, DomainError> {
        let query = format!(
            "INSERT INTO {} (id, phone_number, ip, banned_until, created_at) \
             VALUES (?, ?, ?, ?, ?)",
            self.table
        );

        sqlx::query(&query)
            .bind(ban.id.to_string())
            .bind(&ban.phone_number)
            .bind(&ban.ip)
            .bind(ban.banned_until)
            .bind(ban.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to create ban", e))?;

        Ok(ban)
    }

    async fn find_active(
        &self,
        phone: &str,
        ip: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Ban>, DomainError> {
        let query = format!(
            "SELECT id, phone_number, ip, banned_until, created_at \
             FROM {} \
             WHERE (phone_number = ? OR ip = ?) \
                 AND banned_until IS NOT NULL \
                 AND banned_until > ? \
             ORDER BY banned_until DESC \
             LIMIT 1",
            self.table
        );

        let row = sqlx::query(&query)
            .bind(phone)
            .bind(ip)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find active ban", e))?;

        row.as_ref().map(Self::row_to_ban).transpose()
    }
}
