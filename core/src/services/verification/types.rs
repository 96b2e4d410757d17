//! Types returned by the verification registry

use chrono::{DateTime, Utc};

/// Outcome of a successful code send
///
/// Carries the code for in-process callers and tests. It is never part of
/// an HTTP response.
#[derive(Debug, Clone)]
pub struct SentCode {
    /// The code that was sent
    pub code: String,
    /// Message id reported by the SMS provider
    pub message_id: String,
    /// When the code was stored
    pub sent_at: DateTime<Utc>,
}
