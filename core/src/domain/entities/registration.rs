//! One-time registration credential issued after phone verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single-use proof that a phone number was verified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationCredential {
    /// Unguessable token handed to the client
    pub credential_id: String,

    /// Phone number the credential is bound to
    pub phone_number: String,

    /// When the credential was minted
    pub started_at: DateTime<Utc>,

    /// Once set the credential is permanently inert
    pub is_consumed: bool,
}

impl RegistrationCredential {
    pub fn new(credential_id: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            credential_id: credential_id.into(),
            phone_number: phone_number.into(),
            started_at: Utc::now(),
            is_consumed: false,
        }
    }
}
