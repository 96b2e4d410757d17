//! Verification registry for SMS-based phone verification
//!
//! This module provides the code workflow of sign-up:
//! - Code generation and sending through an injected SMS sender
//! - Single outstanding code per phone number, overwritten on every send
//! - Code confirmation guarded by the sign-up ban policy
//! - Minting of a registration credential on success

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationConfig;
pub use service::VerificationRegistry;
pub use traits::SmsSender;
pub use types::SentCode;
