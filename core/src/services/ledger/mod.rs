//! Attempt ledger: append-only record of sign-up and sign-in attempts

mod service;

#[cfg(test)]
mod tests;

pub use service::{AttemptLedger, FailureSet};
