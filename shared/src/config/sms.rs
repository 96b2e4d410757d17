//! SMS transport configuration

use serde::{Deserialize, Serialize};

/// SMS provider selection and credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Provider name: "log" or "twilio"
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Twilio account SID
    #[serde(default)]
    pub account_sid: Option<String>,

    /// Twilio auth token
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Sender number
    #[serde(default)]
    pub from_number: Option<String>,

    /// Outbound request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            account_sid: None,
            auth_token: None,
            from_number: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_provider() -> String {
    String::from("log")
}

fn default_request_timeout_secs() -> u64 {
    10
}
