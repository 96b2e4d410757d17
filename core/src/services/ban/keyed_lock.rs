//! Per-key async locks
//!
//! Serializes the count-then-mint step of the ban policy for requests that
//! share a phone number or an ip. Keys are always acquired in sorted order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Guards for every key of one `lock` call; released on drop
pub struct KeyedGuard {
    _guards: Vec<OwnedMutexGuard<()>>,
}

/// A map of lazily created async mutexes, one per key
#[derive(Default)]
pub struct KeyedLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the locks for all `keys`
    ///
    /// Duplicate keys are taken once.
    pub async fn lock(&self, keys: &[String]) -> KeyedGuard {
        let mut keys: Vec<&String> = keys.iter().collect();
        keys.sort();
        keys.dedup();

        let mutexes: Vec<Arc<AsyncMutex<()>>> = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            // Nobody holds or waits on an entry whose only owner is the map.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            keys.into_iter()
                .map(|key| Arc::clone(locks.entry(key.clone()).or_default()))
                .collect()
        };

        let mut guards = Vec::with_capacity(mutexes.len());
        for mutex in mutexes {
            guards.push(mutex.lock_owned().await);
        }
        KeyedGuard { _guards: guards }
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
