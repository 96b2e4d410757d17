//! Registration flow: phone verification, credential, account creation

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::RegistrationFlow;
pub use types::NewAccount;
