//! Ban policy service implementation

use std::sync::Arc;

use chrono::Utc;

use gk_shared::phone::mask_phone_number;

use crate::domain::entities::attempt::FlowKind;
use crate::domain::entities::ban::Ban;
use crate::errors::DomainResult;
use crate::repositories::BanRepository;
use crate::services::ledger::AttemptLedger;

use super::config::BanPolicyConfig;
use super::keyed_lock::KeyedLocks;

/// Admit/deny decisions for one flow
///
/// Matching is by phone OR ip: one ip spraying many numbers and one number
/// tried from many ips trip the same breaker. Sign-up and sign-in each get
/// their own policy with their own ledger and ban storage.
pub struct BanPolicy {
    ledger: Arc<AttemptLedger>,
    bans: Arc<dyn BanRepository>,
    config: BanPolicyConfig,
    locks: KeyedLocks,
}

impl BanPolicy {
    /// Create a new ban policy
    ///
    /// # Arguments
    ///
    /// * `ledger` - Attempt ledger of the flow this policy guards
    /// * `bans` - Ban storage of the same flow
    /// * `config` - Threshold and ban duration
    pub fn new(
        ledger: Arc<AttemptLedger>,
        bans: Arc<dyn BanRepository>,
        config: BanPolicyConfig,
    ) -> Self {
        Self {
            ledger,
            bans,
            config,
            locks: KeyedLocks::new(),
        }
    }

    /// The ledger this policy counts failures from
    pub fn ledger(&self) -> &Arc<AttemptLedger> {
        &self.ledger
    }

    pub fn flow(&self) -> FlowKind {
        self.ledger.flow()
    }

    pub fn config(&self) -> &BanPolicyConfig {
        &self.config
    }

    /// Decide whether the (phone, ip) pair is banned, minting a ban if due
    ///
    /// 1. An active ban matching phone or ip: banned, nothing written.
    /// 2. Unconsumed failures matching phone or ip reach `max_wrong_retry`:
    ///    a ban is minted, the counted failures are marked consumed, banned.
    /// 3. Otherwise admitted.
    ///
    /// Steps 2 and 3 run under the locks of both the phone and the ip key so
    /// racing requests cannot mint twice or consume the same failures twice.
    pub async fn is_banned(&self, phone: &str, ip: &str) -> DomainResult<bool> {
        if self.has_active_ban(phone, ip).await? {
            return Ok(true);
        }

        let _guard = self
            .locks
            .lock(&[format!("phone:{}", phone), format!("ip:{}", ip)])
            .await;

        // A racing request may have minted while we waited.
        if self.has_active_ban(phone, ip).await? {
            return Ok(true);
        }

        let failures = self.ledger.unconsumed_failures(phone, ip).await?;
        if failures.len() < self.config.max_wrong_retry {
            return Ok(false);
        }

        let banned_until = Utc::now() + self.config.ban_duration;
        self.bans.create(Ban::until(phone, ip, banned_until)).await?;
        let consumed = self.ledger.mark_consumed(&failures).await?;

        tracing::warn!(
            flow = %self.flow(),
            phone = %mask_phone_number(phone),
            ip = ip,
            failures = failures.len(),
            consumed = consumed,
            event = "ban_minted",
            "Too many failed attempts, ban issued"
        );

        Ok(true)
    }

    async fn has_active_ban(&self, phone: &str, ip: &str) -> DomainResult<bool> {
        let active = self.bans.find_active(phone, ip, Utc::now()).await?;
        if active.is_some() {
            tracing::info!(
                flow = %self.flow(),
                phone = %mask_phone_number(phone),
                ip = ip,
                event = "ban_active",
                "Request denied by active ban"
            );
        }
        Ok(active.is_some())
    }
}
