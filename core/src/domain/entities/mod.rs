//! Domain entities representing core business objects.

pub mod account;
pub mod attempt;
pub mod ban;
pub mod registration;
pub mod verification;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use account::{Account, AccountProfile};
pub use attempt::{Attempt, FlowKind};
pub use ban::Ban;
pub use registration::RegistrationCredential;
pub use verification::VerificationRecord;
