//! Shared data-fetching cache with fixed freshness and retention windows.
//!
//! DESIGN
//! ======
//! Entries are fresh for `stale_time` after they were written and are dropped
//! once unused for `gc_time`. Timestamps are caller-supplied milliseconds so
//! the same code runs on the server, in WASM (no `Instant`), and in tests.
//!
//! The server builds one cache per render; the browser reuses a single
//! instance for the whole page load (see [`query_cache`]) and sweeps it on a
//! timer so unused entries leave within one sweep of the retention window.

#[cfg(test)]
#[path = "query_cache_test.rs"]
mod query_cache_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

const MINUTE_MS: f64 = 60_000.0;

/// Period of the browser garbage-collection sweep.
pub const GC_SWEEP_INTERVAL_MS: u32 = 60_000;

/// Freshness (`stale_time_ms`) and retention (`gc_time_ms`) windows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CacheConfig {
    pub stale_time_ms: f64,
    pub gc_time_ms: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { stale_time_ms: MINUTE_MS, gc_time_ms: 10.0 * MINUTE_MS }
    }
}

#[derive(Clone, Debug)]
struct CacheEntry {
    value: serde_json::Value,
    updated_at_ms: f64,
    last_used_ms: f64,
}

/// Result of a cache read.
#[derive(Clone, Debug, PartialEq)]
pub struct CacheLookup {
    pub value: serde_json::Value,
    /// `true` once the entry is older than the freshness window; callers
    /// should refetch but may render the value meanwhile.
    pub stale: bool,
}

#[derive(Debug, Default)]
pub struct QueryCache {
    config: CacheConfig,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl QueryCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self { config, entries: Mutex::new(HashMap::new()) }
    }

    #[must_use]
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Read `key`, refreshing its last-use time. Entries past the retention
    /// window are evicted instead of returned.
    pub fn get(&self, key: &str, now_ms: f64) -> Option<CacheLookup> {
        let mut entries = self.entries();
        let expired = entries.get(key).map(|e| now_ms - e.last_used_ms > self.config.gc_time_ms)?;
        if expired {
            entries.remove(key);
            return None;
        }
        let entry = entries.get_mut(key)?;
        entry.last_used_ms = now_ms;
        Some(CacheLookup {
            value: entry.value.clone(),
            stale: now_ms - entry.updated_at_ms >= self.config.stale_time_ms,
        })
    }

    pub fn insert(&self, key: impl Into<String>, value: serde_json::Value, now_ms: f64) {
        self.entries()
            .insert(key.into(), CacheEntry { value, updated_at_ms: now_ms, last_used_ms: now_ms });
    }

    /// Mark `key` stale without dropping the cached value.
    pub fn invalidate(&self, key: &str) -> bool {
        let mut entries = self.entries();
        let Some(entry) = entries.get_mut(key) else {
            return false;
        };
        entry.updated_at_ms = f64::NEG_INFINITY;
        true
    }

    /// Drop entries unused for longer than the retention window. Returns the
    /// number removed.
    pub fn collect_garbage(&self, now_ms: f64) -> usize {
        let gc_time_ms = self.config.gc_time_ms;
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|_, e| now_ms - e.last_used_ms <= gc_time_ms);
        before - entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cache for the current render.
///
/// Server: a fresh instance per call, so requests never share data.
/// Browser: one instance for the page load, created on first access.
pub fn query_cache() -> Arc<QueryCache> {
    #[cfg(feature = "hydrate")]
    {
        static BROWSER_CACHE: OnceLock<Arc<QueryCache>> = OnceLock::new();
        shared_instance(&BROWSER_CACHE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(QueryCache::new(CacheConfig::default()))
    }
}

/// Sweep `cache` every [`GC_SWEEP_INTERVAL_MS`] until the current owner is
/// cleaned up.
#[cfg(feature = "hydrate")]
pub fn install_garbage_collection(cache: Arc<QueryCache>) {
    use leptos::prelude::{StoredValue, on_cleanup};

    let sweep = gloo_timers::callback::Interval::new(GC_SWEEP_INTERVAL_MS, move || {
        let removed = cache.collect_garbage(now_ms());
        if removed > 0 {
            log::debug!("query cache dropped {removed} expired entries");
        }
    });
    let sweep = StoredValue::new_local(Some(sweep));
    on_cleanup(move || sweep.set_value(None));
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn shared_instance(holder: &OnceLock<Arc<QueryCache>>) -> Arc<QueryCache> {
    Arc::clone(holder.get_or_init(|| Arc::new(QueryCache::new(CacheConfig::default()))))
}

/// Wall-clock milliseconds for cache timestamps.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}
