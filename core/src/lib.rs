//! # Gatekeeper Core
//!
//! Phone verification, registration and sign-in abuse control.
//!
//! The crate holds the domain entities, the repository interfaces (with
//! in-memory implementations), and the services:
//! - [`services::AttemptLedger`] and [`services::BanPolicy`], instantiated once
//!   per flow with independent storage
//! - [`services::VerificationRegistry`] and [`services::PreRegistrationVault`]
//! - [`services::RegistrationFlow`] and [`services::SignInGuard`]

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Account, AccountProfile, Attempt, Ban, FlowKind, RegistrationCredential, VerificationRecord,
};
pub use domain::value_objects::SessionTokens;
pub use errors::{AuthError, DomainError, DomainResult, ValidationError};
pub use repositories::{
    AccountRepository, AttemptRepository, BanRepository, RegistrationRepository,
    VerificationRepository,
};
pub use services::{
    AttemptLedger, BanPolicy, CredentialIssuer, PasswordCredentialIssuer, PreRegistrationVault,
    RegistrationFlow, SignInGuard, SmsSender, VerificationRegistry,
};
