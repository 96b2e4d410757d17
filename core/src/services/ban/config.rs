//! Configuration for the ban policy

use chrono::Duration;

/// Threshold and fixed ban window for one flow
#[derive(Debug, Clone, Copy)]
pub struct BanPolicyConfig {
    /// Unconsumed failures that trigger a ban
    pub max_wrong_retry: usize,
    /// How long a minted ban lasts
    pub ban_duration: Duration,
}

impl Default for BanPolicyConfig {
    fn default() -> Self {
        Self::from(&gk_shared::BanPolicyConfig::default())
    }
}

impl From<&gk_shared::BanPolicyConfig> for BanPolicyConfig {
    fn from(config: &gk_shared::BanPolicyConfig) -> Self {
        Self {
            max_wrong_retry: config.max_wrong_retry as usize,
            ban_duration: ban_duration(config.ban_duration_seconds),
        }
    }
}

/// Seconds to a ban window, capped at the longest accepted ban
fn ban_duration(seconds: u64) -> Duration {
    let capped = seconds.min(gk_shared::MAX_BAN_DURATION_SECONDS);
    i64::try_from(capped)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or_else(|| Duration::days(3650))
}
