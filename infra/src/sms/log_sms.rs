//! SMS sender that only logs

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use gk_core::services::SmsSender;
use gk_shared::phone::mask_phone_number;
use tracing::info;

/// Logs each code instead of delivering it
///
/// The code itself is logged, so this sender must not be used in production.
#[derive(Debug, Default)]
pub struct LogSmsSender {
    sent: AtomicU64,
}

impl LogSmsSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of codes "sent" so far
    pub fn sent_count(&self) -> u64 {
        self.sent.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SmsSender for LogSmsSender {
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String> {
        let sequence = self.sent.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("log-{}", sequence);

        info!(
            event = "sms_logged",
            phone = %mask_phone_number(phone),
            code = %code,
            message_id = %message_id,
            "Verification code (log transport)"
        );

        Ok(message_id)
    }
}
