//! Trait for SMS transport integration

use async_trait::async_trait;

/// Sends verification codes to phone numbers
///
/// The core never retries; an `Err` is surfaced to the caller as a
/// transport failure.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send `code` to `phone`, returning the provider's message id
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String>;
}
