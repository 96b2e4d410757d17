//! Sign-in guard: ban checks and attempt recording around credential issuance

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::SignInGuardConfig;
pub use service::SignInGuard;
