//! Pre-registration vault: single-use registration credentials

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::VaultConfig;
pub use service::PreRegistrationVault;
