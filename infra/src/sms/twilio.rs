//! Twilio SMS transport
//!
//! Posts to the Messages resource of the Twilio REST API. A failed send is
//! reported once; the caller decides whether to ask again.

use std::time::Duration;

use async_trait::async_trait;
use gk_core::services::SmsSender;
use gk_shared::phone::mask_phone_number;
use gk_shared::SmsConfig;
use serde::Deserialize;
use tracing::{error, info};

use crate::InfrastructureError;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Twilio credentials and sender number
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub request_timeout_secs: u64,
    /// Overridable for tests
    pub api_base: String,
}

impl TryFrom<&SmsConfig> for TwilioConfig {
    type Error = InfrastructureError;

    fn try_from(config: &SmsConfig) -> Result<Self, Self::Error> {
        let required = |value: &Option<String>, name: &str| {
            value
                .clone()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| InfrastructureError::Config(format!("sms.{} is not set", name)))
        };

        let from_number = required(&config.from_number, "from_number")?;
        if !from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "sms.from_number must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid: required(&config.account_sid, "account_sid")?,
            auth_token: required(&config.auth_token, "auth_token")?,
            from_number,
            request_timeout_secs: config.request_timeout_secs,
            api_base: TWILIO_API_BASE.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: Option<i64>,
    message: Option<String>,
}

/// Twilio implementation of SmsSender
pub struct TwilioSmsSender {
    client: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioSmsSender {
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            event = "sms_transport_ready",
            provider = "twilio",
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS transport initialized"
        );

        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            self.config.api_base.trim_end_matches('/'),
            self.config.account_sid
        )
    }

    async fn send_message(&self, to: &str, body: &str) -> Result<String, InfrastructureError> {
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[("To", to), ("From", self.config.from_number.as_str()), ("Body", body)])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let message: MessageResponse = response.json().await?;
            return Ok(message.sid);
        }

        let detail = match response.json::<ErrorResponse>().await {
            Ok(err) => format!(
                "{} (code {})",
                err.message.unwrap_or_else(|| "unknown error".to_string()),
                err.code.map_or_else(|| "n/a".to_string(), |c| c.to_string())
            ),
            Err(_) => "unreadable error body".to_string(),
        };

        Err(InfrastructureError::Sms(format!(
            "Twilio returned {}: {}",
            status, detail
        )))
    }
}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String> {
        let body = format!("Your verification code is: {}", code);

        match self.send_message(phone, &body).await {
            Ok(sid) => {
                info!(
                    event = "sms_sent",
                    provider = "twilio",
                    phone = %mask_phone_number(phone),
                    message_id = %sid,
                    "Verification code sent"
                );
                Ok(sid)
            }
            Err(e) => {
                error!(
                    event = "sms_failed",
                    provider = "twilio",
                    phone = %mask_phone_number(phone),
                    error = %e,
                    "Failed to send verification code"
                );
                Err(e.to_string())
            }
        }
    }
}
