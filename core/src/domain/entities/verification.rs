//! Verification record holding the single outstanding code per phone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest verification code sent to a phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Phone number, unique key of the record
    pub phone_number: String,

    /// The code most recently sent
    pub last_code: String,

    /// When `last_code` was sent
    pub last_sent_at: DateTime<Utc>,

    /// Set when `last_code` has been exchanged for a registration credential
    pub is_validated: bool,

    /// Timestamp when the record was first created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Creates a record for a freshly sent code
    pub fn new(phone_number: impl Into<String>, code: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            phone_number: phone_number.into(),
            last_code: code.into(),
            last_sent_at: now,
            is_validated: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the outstanding code and starts a new verification round
    pub fn reissue(&mut self, code: impl Into<String>) {
        let now = Utc::now();
        self.last_code = code.into();
        self.last_sent_at = now;
        self.is_validated = false;
        self.updated_at = now;
    }

    /// Whether `code` is the outstanding, not yet validated code
    pub fn accepts(&self, code: &str) -> bool {
        !self.is_validated && self.last_code == code
    }
}
