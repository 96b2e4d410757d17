//! Account entity created at the end of registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile fields supplied when completing registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// A registered account, unique per phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Verified phone number, unique across accounts
    pub phone_number: String,

    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,

    /// Password hash, never the raw password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Whether the account may sign in
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates an active account bound to a verified phone number
    ///
    /// # Arguments
    ///
    /// * `phone_number` - Phone number returned by the consumed registration credential
    /// * `profile` - Profile fields supplied by the client
    /// * `password_hash` - Hash produced by the credential issuer
    pub fn new(
        phone_number: impl Into<String>,
        profile: AccountProfile,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            username: profile.username,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            password_hash: password_hash.into(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
