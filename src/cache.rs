//! In-process result cache with lazy TTL expiry.

use crate::gog::models::PriceObservation;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default entry lifetime: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

struct CacheEntry {
    created_at: Instant,
    observations: Vec<PriceObservation>,
}

/// Process-lifetime cache of aggregated price results, keyed by the
/// normalized game URL.
///
/// Expiry is lazy: a stale entry is reported absent but stays in the map
/// until the same key is overwritten. There is no eviction sweep, so the
/// map can grow for the lifetime of the process.
pub struct PriceCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl PriceCache {
    /// Creates a cache with the given entry lifetime.
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: Mutex::new(HashMap::new()) }
    }

    /// Returns the stored observations for `key` if the entry is still
    /// within its TTL.
    pub fn get(&self, key: &str) -> Option<Vec<PriceObservation>> {
        let entries = self.entries.lock().unwrap();

        entries.get(key).filter(|entry| entry.created_at.elapsed() < self.ttl).map(|entry| {
            debug!("cache hit: {}", key);
            entry.observations.clone()
        })
    }

    /// Stores observations under `key`, replacing any previous entry.
    pub fn put(&self, key: String, observations: Vec<PriceObservation>) {
        debug!("cache store: {} ({} observations)", key, observations.len());

        let mut entries = self.entries.lock().unwrap();
        entries.insert(key, CacheEntry { created_at: Instant::now(), observations });
    }

    /// Number of entries currently held, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
