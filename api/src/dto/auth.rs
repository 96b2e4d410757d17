//! Request and response bodies of the auth endpoints

use chrono::{DateTime, Utc};
use gk_core::domain::entities::Account;
use gk_core::SessionTokens;
use gk_shared::phone::is_valid_phone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Rejects anything that isn't an accepted mobile number after normalization
fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_number");
        err.message = Some("number you entered is invalid".into());
        Err(err)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Mobile number, e.g. "09123456789" or "0912-345-6789"
    #[validate(custom = "validate_phone_number")]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmCodeRequest {
    #[validate(custom = "validate_phone_number")]
    pub phone_number: String,

    /// Digits are checked against the configured code length by the flow
    #[validate(length(min = 1, max = 16))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmCodeResponse {
    pub registration_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompleteRegistrationRequest {
    #[validate(length(min = 1, max = 128))]
    pub registration_id: String,

    #[validate(length(min = 1, max = 150))]
    pub username: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 150))]
    pub first_name: Option<String>,

    #[validate(length(max = 150))]
    pub last_name: Option<String>,
}

/// Public view of a created account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub phone_number: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            phone_number: account.phone_number,
            username: account.username,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            created_at: account.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(custom = "validate_phone_number")]
    pub phone_number: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub access: String,
    pub refresh: String,
    pub expires_in: i64,
}

impl From<SessionTokens> for SignInResponse {
    fn from(tokens: SessionTokens) -> Self {
        Self {
            access: tokens.access,
            refresh: tokens.refresh,
            expires_in: tokens.expires_in,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, max = 4096))]
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenResponse {
    pub access: String,
    pub expires_in: i64,
}

impl From<SessionTokens> for RefreshTokenResponse {
    fn from(tokens: SessionTokens) -> Self {
        Self {
            access: tokens.access,
            expires_in: tokens.expires_in,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserExistsRequest {
    #[validate(custom = "validate_phone_number")]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserExistsResponse {
    pub exist: bool,
}
