//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and embedded migrations
//! - Repository implementations for attempts, bans, verification records,
//!   registration credentials and accounts
//!
//! Sign-up and sign-in keep their attempts and bans in separate tables.

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlAccountRepository, MySqlAttemptRepository, MySqlBanRepository,
    MySqlRegistrationRepository, MySqlVerificationRepository,
};
