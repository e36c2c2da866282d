use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::key::CacheKey;
use crate::stats::{CacheStats, StatsCounters};
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    // Still fresh at exactly `ttl`.
    fn is_fresh(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) <= self.ttl
    }
}

/// Entries plus the invalidation marks read-through fetches check against.
///
/// Every invalidation advances `tick` and stamps the key, namespace or whole
/// cache it covered. A fetch that started at tick `t` may only store its
/// result if nothing covering its key was stamped after `t`.
#[derive(Default)]
struct Store {
    entries: HashMap<CacheKey, CacheEntry>,
    tick: u64,
    key_marks: HashMap<CacheKey, u64>,
    namespace_marks: HashMap<String, u64>,
    cleared_at: u64,
}

impl Store {
    fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn invalidated_since(&self, key: &CacheKey, started: u64) -> bool {
        self.cleared_at > started
            || self.key_marks.get(key).is_some_and(|&mark| mark > started)
            || self
                .namespace_marks
                .get(key.namespace())
                .is_some_and(|&mark| mark > started)
    }
}

fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Key → value store with per-entry expiry.
///
/// Build one per process and share it (`Arc<TtlCache>`); tests build their
/// own. The map is guarded by a mutex that is never held across an await.
pub struct TtlCache {
    store: Mutex<Store>,
    clock: Arc<dyn Clock>,
    config: CacheConfig,
    stats: StatsCounters,
}

impl TtlCache {
    /// Creates an empty cache on the system clock with default TTLs.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    #[must_use]
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_clock_and_config(Arc::new(SystemClock), config)
    }

    /// Creates an empty cache on the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_clock_and_config(clock, CacheConfig::default())
    }

    #[must_use]
    pub fn with_clock_and_config(clock: Arc<dyn Clock>, config: CacheConfig) -> Self {
        Self {
            store: Mutex::new(Store::default()),
            clock,
            config,
            stats: StatsCounters::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns a clone of the fresh value stored under `key`.
    ///
    /// Unknown keys, expired entries (which are evicted) and values stored
    /// with a different type all read as `None`.
    pub fn get<T: Clone + Send + Sync + 'static>(&self, key: &CacheKey) -> Option<T> {
        let now = self.clock.now();
        let mut store = self.lock();
        let Some(entry) = store.entries.get(key) else {
            self.stats.record_miss();
            debug!(%key, "cache miss");
            return None;
        };
        if !entry.is_fresh(now) {
            store.entries.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            debug!(%key, "cache entry expired");
            return None;
        }
        match entry.value.downcast_ref::<T>() {
            Some(value) => {
                self.stats.record_hit();
                debug!(%key, "cache hit");
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                debug!(%key, "cache entry has a different type");
                None
            }
        }
    }

    /// Stores `value` under `key` for `ttl`, replacing any previous entry.
    pub fn set<T: Send + Sync + 'static>(&self, key: CacheKey, value: T, ttl: Duration) {
        let entry = self.entry(value, ttl);
        debug!(%key, ttl_ms = saturating_millis(ttl), "cache set");
        self.lock().entries.insert(key, entry);
    }

    /// Stores `value` with the TTL configured for the key's name.
    pub fn set_default<T: Send + Sync + 'static>(&self, key: CacheKey, value: T) {
        let ttl = self.config.ttl_for(key.name());
        self.set(key, value, ttl);
    }

    /// Removes `key` whether or not it has expired. Returns whether it was present.
    ///
    /// A read-through fetch already running for `key` will not store its result.
    pub fn invalidate(&self, key: &CacheKey) -> bool {
        let removed = {
            let mut store = self.lock();
            let mark = store.advance();
            store.key_marks.insert(key.clone(), mark);
            store.entries.remove(key).is_some()
        };
        if removed {
            self.stats.record_invalidations(1);
            debug!(%key, "cache entry invalidated");
        }
        removed
    }

    /// Removes every key in `namespace`. Returns how many were removed.
    pub fn invalidate_namespace(&self, namespace: &str) -> usize {
        let mut store = self.lock();
        let mark = store.advance();
        store.namespace_marks.insert(namespace.to_string(), mark);
        let before = store.entries.len();
        store.entries.retain(|key, _| key.namespace() != namespace);
        let removed = before - store.entries.len();
        drop(store);
        self.stats.record_invalidations(removed as u64);
        debug!(namespace, removed, "cache namespace invalidated");
        removed
    }

    /// Drops every entry.
    pub fn clear(&self) {
        let removed = {
            let mut store = self.lock();
            let mark = store.advance();
            store.cleared_at = mark;
            // The clear mark covers every earlier key and namespace mark.
            store.key_marks.clear();
            store.namespace_marks.clear();
            let n = store.entries.len();
            store.entries.clear();
            n
        };
        self.stats.record_invalidations(removed as u64);
    }

    /// Returns true if `key` holds an unexpired entry. Does not evict or count.
    #[must_use]
    pub fn contains_fresh(&self, key: &CacheKey) -> bool {
        let now = self.clock.now();
        self.lock().entries.get(key).is_some_and(|entry| entry.is_fresh(now))
    }

    /// Number of stored entries, including expired ones not yet read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    /// Read-through lookup.
    ///
    /// On a miss `fetch` runs and a successful result is stored for `ttl`.
    /// Errors are returned untouched and leave the cache as it was.
    ///
    /// If `key` is invalidated while `fetch` is running (directly, through its
    /// namespace, or by `clear`), the result is returned but not stored: it may
    /// predate the write that caused the invalidation.
    pub async fn get_or_fetch<T, E, F, Fut>(
        &self,
        key: &CacheKey,
        ttl: Duration,
        fetch: F,
    ) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get::<T>(key) {
            return Ok(value);
        }
        let started = self.lock().tick;
        let value = fetch().await?;

        let entry = self.entry(value.clone(), ttl);
        let mut store = self.lock();
        if store.invalidated_since(key, started) {
            drop(store);
            debug!(%key, "invalidated during fetch, result not stored");
        } else {
            store.entries.insert(key.clone(), entry);
            drop(store);
            debug!(%key, ttl_ms = saturating_millis(ttl), "cache set");
        }
        Ok(value)
    }

    fn entry<T: Send + Sync + 'static>(&self, value: T, ttl: Duration) -> CacheEntry {
        CacheEntry {
            value: Arc::new(value),
            stored_at: self.clock.now(),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TtlCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("entries", &self.len())
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}
