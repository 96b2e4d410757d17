//! Abuse-control configuration
//!
//! Sign-up and sign-in each carry their own ban policy so operators can
//! tune them independently.

use serde::{Deserialize, Serialize};

/// Longest accepted ban (ten years)
pub const MAX_BAN_DURATION_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

/// Threshold and duration of a ban for one flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BanPolicyConfig {
    /// Unconsumed failures (by phone or by IP) that trigger a ban
    #[serde(default = "default_max_wrong_retry")]
    pub max_wrong_retry: u32,

    /// Length of an issued ban in seconds
    #[serde(default = "default_ban_duration_seconds")]
    pub ban_duration_seconds: u64,
}

impl Default for BanPolicyConfig {
    fn default() -> Self {
        Self {
            max_wrong_retry: default_max_wrong_retry(),
            ban_duration_seconds: default_ban_duration_seconds(),
        }
    }
}

impl BanPolicyConfig {
    /// Create a policy with explicit values
    pub fn new(max_wrong_retry: u32, ban_duration_seconds: u64) -> Self {
        Self {
            max_wrong_retry,
            ban_duration_seconds,
        }
    }

    /// Check the policy is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.max_wrong_retry == 0 {
            return Err("max_wrong_retry must be at least 1".to_string());
        }
        if self.ban_duration_seconds == 0 {
            return Err("ban_duration_seconds must be at least 1".to_string());
        }
        if self.ban_duration_seconds > MAX_BAN_DURATION_SECONDS {
            return Err(format!(
                "ban_duration_seconds must be at most {}",
                MAX_BAN_DURATION_SECONDS
            ));
        }
        Ok(())
    }
}

/// Ban policies per flow
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct AbuseControlConfig {
    #[serde(default)]
    pub sign_up: BanPolicyConfig,

    #[serde(default)]
    pub sign_in: BanPolicyConfig,
}

fn default_max_wrong_retry() -> u32 {
    5
}

fn default_ban_duration_seconds() -> u64 {
    3600
}
