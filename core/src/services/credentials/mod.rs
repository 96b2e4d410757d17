//! Credential issuer: password hashing and session token issuance

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::CredentialIssuerConfig;
pub use service::{Claims, PasswordCredentialIssuer, TokenKind};
pub use traits::CredentialIssuer;
