//! MySQL repository implementations
//!
//! Each flow (sign-up, sign-in) has its own attempt and ban tables, selected
//! by the `FlowKind` the repository is constructed with.

pub mod account_repository_impl;
pub mod attempt_repository_impl;
pub mod ban_repository_impl;
pub mod registration_repository_impl;
pub mod verification_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use attempt_repository_impl::MySqlAttemptRepository;
pub use ban_repository_impl::MySqlBanRepository;
pub use registration_repository_impl::MySqlRegistrationRepository;
pub use verification_repository_impl::MySqlVerificationRepository;

use gk_core::domain::entities::FlowKind;
use gk_core::errors::DomainError;

/// Attempt table for a flow
pub(crate) fn attempts_table(flow: FlowKind) -> &'static str {
    match flow {
        FlowKind::SignUp => "sign_up_attempts",
        FlowKind::SignIn => "sign_in_attempts",
    }
}

/// Ban table for a flow
pub(crate) fn bans_table(flow: FlowKind) -> &'static str {
    match flow {
        FlowKind::SignUp => "sign_up_bans",
        FlowKind::SignIn => "sign_in_bans",
    }
}

/// `?, ?, ?` list for an `IN (...)` clause with `n` binds
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// Wrap a sqlx error with the operation that failed
pub(crate) fn storage_error(context: &str, err: sqlx::Error) -> DomainError {
    DomainError::storage(format!("{}: {}", context, err))
}

/// Read a column, reporting the column name on failure
pub(crate) fn column<'r, T>(row: &'r sqlx::mysql::MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    use sqlx::Row;
    row.try_get(name)
        .map_err(|e| DomainError::Internal { message: format!("Failed to get {}: {}", name, e) })
}

/// Parse a CHAR(36) uuid column
pub(crate) fn uuid_column(row: &sqlx::mysql::MySqlRow, name: &str) -> Result<uuid::Uuid, DomainError> {
    let raw: String = column(row, name)?;
    uuid::Uuid::parse_str(&raw)
        .map_err(|e| DomainError::Internal { message: format!("Invalid UUID in {}: {}", name, e) })
}
