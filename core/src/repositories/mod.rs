//! Repository interfaces for durable storage, with in-memory implementations
//!
//! Production deployments back these traits with MySQL (see `gk_infra`).
//! The in-memory implementations serve tests and local development.

pub mod account;
pub mod attempt;
pub mod ban;
pub mod registration;
pub mod verification;

pub use account::{AccountRepository, InMemoryAccountRepository};
pub use attempt::{AttemptRepository, InMemoryAttemptRepository};
pub use ban::{BanRepository, InMemoryBanRepository};
pub use registration::{InMemoryRegistrationRepository, RegistrationRepository};
pub use verification::{InMemoryVerificationRepository, VerificationRepository};
