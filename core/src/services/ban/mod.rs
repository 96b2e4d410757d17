//! Ban policy: decides admit/deny for a (phone, ip) pair and mints bans

mod config;
mod keyed_lock;
mod service;

#[cfg(test)]
mod tests;

pub use config::BanPolicyConfig;
pub use keyed_lock::{KeyedGuard, KeyedLocks};
pub use service::BanPolicy;
