//! Ban entity minted by the ban policy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Time-bounded denial for a (phone, ip) pair
///
/// Bans are never updated after creation. A new offence produces a new row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ban {
    /// Unique identifier for the ban
    pub id: Uuid,

    /// Phone number of the request that tripped the ban
    pub phone_number: String,

    /// Client IP of the request that tripped the ban
    pub ip: String,

    /// End of the ban; `None` never counts as active
    pub banned_until: Option<DateTime<Utc>>,

    /// Timestamp when the ban was created
    pub created_at: DateTime<Utc>,
}

impl Ban {
    /// Creates a ban that lasts until `banned_until`
    pub fn until(
        phone_number: impl Into<String>,
        ip: impl Into<String>,
        banned_until: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            ip: ip.into(),
            banned_until: Some(banned_until),
            created_at: Utc::now(),
        }
    }

    /// Whether the ban is in effect at `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.banned_until.map_or(false, |until| until > now)
    }

    /// Whether the ban is in effect right now
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    /// Matches when either the phone number or the ip is the same
    pub fn matches(&self, phone_number: &str, ip: &str) -> bool {
        self.phone_number == phone_number || self.ip == ip
    }
}
