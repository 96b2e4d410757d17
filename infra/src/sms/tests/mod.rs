//! Unit tests for the SMS transports

use gk_core::services::SmsSender;
use gk_shared::SmsConfig;

use crate::sms::{create_sms_sender, LogSmsSender};
use crate::InfrastructureError;

#[tokio::test]
async fn test_log_sender_returns_distinct_message_ids() {
    let sender = LogSmsSender::new();

    let first = sender.send_code("0912345678", "123456").await.unwrap();
    let second = sender.send_code("0912345678", "654321").await.unwrap();

    assert_ne!(first, second);
    assert_eq!(sender.sent_count(), 2);
}

#[tokio::test]
async fn test_factory_defaults_to_log_sender() {
    let sender = create_sms_sender(&SmsConfig::default()).unwrap();
    assert!(sender.send_code("0912345678", "123456").await.is_ok());
}

#[test]
fn test_factory_rejects_unknown_provider() {
    let config = SmsConfig {
        provider: "carrier-pigeon".to_string(),
        ..SmsConfig::default()
    };

    match create_sms_sender(&config) {
        Err(InfrastructureError::Config(message)) => assert!(message.contains("carrier-pigeon")),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("unknown provider accepted"),
    }
}

#[cfg(feature = "twilio-sms")]
mod twilio {
    use super::*;
    use crate::sms::{TwilioConfig, TwilioSmsSender};

    fn twilio_config() -> SmsConfig {
        SmsConfig {
            provider: "twilio".to_string(),
            account_sid: Some("AC123".to_string()),
            auth_token: Some("secret".to_string()),
            from_number: Some("+15005550006".to_string()),
            request_timeout_secs: 1,
        }
    }

    #[test]
    fn test_twilio_config_requires_credentials() {
        let config = SmsConfig {
            auth_token: None,
            ..twilio_config()
        };
        assert!(matches!(
            TwilioConfig::try_from(&config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[test]
    fn test_twilio_config_requires_e164_sender() {
        let config = SmsConfig {
            from_number: Some("15005550006".to_string()),
            ..twilio_config()
        };
        assert!(TwilioConfig::try_from(&config).is_err());
    }

    #[test]
    fn test_factory_builds_twilio_sender() {
        assert!(create_sms_sender(&twilio_config()).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_reported_as_error() {
        let mut config = TwilioConfig::try_from(&twilio_config()).unwrap();
        config.api_base = "http://127.0.0.1:9".to_string();
        let sender = TwilioSmsSender::new(config).unwrap();

        let result = sender.send_code("+886912345678", "123456").await;
        assert!(result.is_err());
    }
}
