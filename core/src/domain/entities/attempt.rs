//! Attempt entity recorded by the attempt ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The flow an attempt or ban belongs to
///
/// Each flow owns its own ledger and ban storage. Attempts from one flow are
/// never counted against the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Phone verification and account creation
    SignUp,
    /// Password sign-in
    SignIn,
}

impl FlowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::SignUp => "sign_up",
            FlowKind::SignIn => "sign_in",
        }
    }
}

impl std::fmt::Display for FlowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single sign-up or sign-in attempt from a (phone, ip) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// Unique identifier for the attempt
    pub id: Uuid,

    /// Phone number the attempt was made for
    pub phone_number: String,

    /// Client IP the attempt came from
    pub ip: String,

    /// Whether the attempt succeeded
    pub succeeded: bool,

    /// Set once the failure has been counted toward a ban
    pub consumed_by_ban: bool,

    /// Timestamp when the attempt was recorded
    pub created_at: DateTime<Utc>,
}

impl Attempt {
    /// Creates a new, unconsumed attempt
    pub fn new(phone_number: impl Into<String>, ip: impl Into<String>, succeeded: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            ip: ip.into(),
            succeeded,
            consumed_by_ban: false,
            created_at: Utc::now(),
        }
    }

    /// Matches when either the phone number or the ip is the same
    pub fn matches(&self, phone_number: &str, ip: &str) -> bool {
        self.phone_number == phone_number || self.ip == ip
    }

    /// A failure that has not yet been counted toward a ban
    pub fn is_unconsumed_failure(&self) -> bool {
        !self.succeeded && !self.consumed_by_ban
    }
}
