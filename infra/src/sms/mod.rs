//! SMS transports for verification codes
//!
//! - `log`: writes the code to the structured log (development, tests)
//! - `twilio`: Twilio Messages API over HTTPS (feature `twilio-sms`)

pub mod log_sms;
#[cfg(feature = "twilio-sms")]
pub mod twilio;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use gk_core::services::SmsSender;
use gk_shared::SmsConfig;

use crate::InfrastructureError;

pub use log_sms::LogSmsSender;
#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsSender};

/// Build the SMS sender named by `config.provider`
pub fn create_sms_sender(config: &SmsConfig) -> Result<Arc<dyn SmsSender>, InfrastructureError> {
    match config.provider.to_ascii_lowercase().as_str() {
        "log" | "mock" => Ok(Arc::new(LogSmsSender::new())),
        #[cfg(feature = "twilio-sms")]
        "twilio" => {
            let twilio_config = TwilioConfig::try_from(config)?;
            Ok(Arc::new(TwilioSmsSender::new(twilio_config)?))
        }
        other => Err(InfrastructureError::Config(format!(
            "Unsupported SMS provider: {}",
            other
        ))),
    }
}
