use super::*;

use serde_json::json;

const MINUTE: f64 = 60_000.0;

#[test]
fn default_windows_are_one_and_ten_minutes() {
    let config = CacheConfig::default();
    assert!((config.stale_time_ms - MINUTE).abs() < f64::EPSILON);
    assert!((config.gc_time_ms - 10.0 * MINUTE).abs() < f64::EPSILON);
}

#[test]
fn sweep_runs_well_inside_the_retention_window() {
    let config = CacheConfig::default();
    assert!(f64::from(GC_SWEEP_INTERVAL_MS) <= config.stale_time_ms);
    assert!(f64::from(GC_SWEEP_INTERVAL_MS) < config.gc_time_ms);
}

#[test]
fn sweep_at_next_tick_removes_entry_that_just_expired() {
    let cache = QueryCache::new(CacheConfig::default());
    cache.insert("k", json!(1), 0.0);
    let tick = f64::from(GC_SWEEP_INTERVAL_MS);
    let mut now = 0.0;
    while cache.collect_garbage(now) == 0 {
        now += tick;
    }
    assert!(now <= cache.config().gc_time_ms + tick);
    assert!(cache.is_empty());
}

#[test]
fn entry_is_fresh_inside_stale_window() {
    let cache = QueryCache::new(CacheConfig::default());
    cache.insert("boards", json!([1, 2]), 0.0);

    let hit = cache.get("boards", MINUTE - 1.0).unwrap();
    assert_eq!(hit.value, json!([1, 2]));
    assert!(!hit.stale);
}

#[test]
fn entry_turns_stale_after_one_minute() {
    let cache = QueryCache::new(CacheConfig::default());
    cache.insert("boards", json!("v"), 0.0);
    assert!(cache.get("boards", MINUTE).unwrap().stale);
}

#[test]
fn reinsert_makes_entry_fresh_again() {
    let cache = QueryCache::new(CacheConfig::default());
    cache.insert("k", json!(1), 0.0);
    cache.insert("k", json!(2), 2.0 * MINUTE);

    let hit = cache.get("k", 2.5 * MINUTE).unwrap();
    assert_eq!(hit.value, json!(2));
    assert!(!hit.stale);
}

#[test]
fn invalidate_marks_stale_but_keeps_value() {
    let cache = QueryCache::new(CacheConfig::default());
    cache.insert("k", json!(1), 0.0);
    assert!(cache.invalidate("k"));
    assert!(!cache.invalidate("missing"));

    let hit = cache.get("k", 1.0).unwrap();
    assert!(hit.stale);
    assert_eq!(hit.value, json!(1));
}

#[test]
fn garbage_collection_drops_entries_unused_for_ten_minutes() {
    let cache = QueryCache::new(CacheConfig::default());
    cache.insert("old", json!(1), 0.0);
    cache.insert("recent", json!(2), 0.0);
    cache.get("recent", 9.0 * MINUTE);

    assert_eq!(cache.collect_garbage(10.5 * MINUTE), 1);
    assert_eq!(cache.len(), 1);
    assert!(cache.get("recent", 10.5 * MINUTE).is_some());
}

#[test]
fn get_evicts_entry_past_retention() {
    let cache = QueryCache::new(CacheConfig::default());
    cache.insert("k", json!(1), 0.0);
    assert!(cache.get("k", 11.0 * MINUTE).is_none());
    assert!(cache.is_empty());
}

#[test]
fn shared_holder_yields_one_instance() {
    let holder = OnceLock::new();
    let a = shared_instance(&holder);
    let b = shared_instance(&holder);
    assert!(Arc::ptr_eq(&a, &b));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_renders_get_separate_caches() {
    let a = query_cache();
    let b = query_cache();
    assert!(!Arc::ptr_eq(&a, &b));
    a.insert("k", json!(1), 0.0);
    assert!(b.is_empty());
}

#[test]
fn now_ms_is_positive() {
    assert!(now_ms() > 0.0);
}
