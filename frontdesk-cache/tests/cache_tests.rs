use frontdesk_cache::{CacheConfig, CacheKey, CacheStats, Clock, ManualClock, TtlCache};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn key(name: &str) -> CacheKey {
    CacheKey::new("collections", name)
}

fn manual_cache() -> (Arc<ManualClock>, TtlCache) {
    let clock = Arc::new(ManualClock::new());
    let cache = TtlCache::with_clock(clock.clone());
    (clock, cache)
}

// ── Expiry ───────────────────────────────────────────────────────

#[test]
fn value_readable_before_ttl_and_gone_after() {
    let cache = TtlCache::new();
    cache.set(key("patients"), vec!["Ann".to_string()], Duration::from_millis(100));
    assert_eq!(cache.get::<Vec<String>>(&key("patients")), Some(vec!["Ann".to_string()]));

    std::thread::sleep(Duration::from_millis(150));
    assert_eq!(cache.get::<Vec<String>>(&key("patients")), None);
}

#[test]
fn entry_is_fresh_at_exactly_ttl() {
    let (clock, cache) = manual_cache();
    cache.set(key("doctors"), 7u32, Duration::from_secs(60));
    clock.advance(Duration::from_secs(60));
    assert_eq!(cache.get::<u32>(&key("doctors")), Some(7));
    clock.advance(Duration::from_millis(1));
    assert_eq!(cache.get::<u32>(&key("doctors")), None);
}

#[test]
fn expired_entry_is_evicted_on_read() {
    let (clock, cache) = manual_cache();
    cache.set(key("patients"), 1u8, Duration::from_secs(1));
    clock.advance(Duration::from_secs(2));
    assert_eq!(cache.len(), 1);
    assert!(!cache.contains_fresh(&key("patients")));
    assert_eq!(cache.get::<u8>(&key("patients")), None);
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.stats().expirations, 1);
}

#[test]
fn zero_ttl_is_fresh_only_at_the_same_instant() {
    let (clock, cache) = manual_cache();
    cache.set(key("x"), 1u8, Duration::ZERO);
    assert_eq!(cache.get::<u8>(&key("x")), Some(1));
    clock.advance(Duration::from_nanos(1));
    assert_eq!(cache.get::<u8>(&key("x")), None);
}

// ── Invalidation ─────────────────────────────────────────────────

#[test]
fn invalidate_removes_unexpired_entry() {
    let cache = TtlCache::new();
    cache.set(key("appointments"), 3usize, Duration::from_millis(10_000));
    assert!(cache.invalidate(&key("appointments")));
    assert_eq!(cache.get::<usize>(&key("appointments")), None);
    assert!(!cache.invalidate(&key("appointments")));
}

#[test]
fn invalidate_namespace_leaves_other_namespaces() {
    let cache = TtlCache::new();
    cache.set(key("patients"), 1u8, Duration::from_secs(60));
    cache.set(key("doctors"), 2u8, Duration::from_secs(60));
    cache.set(CacheKey::new("screens", "patients"), 3u8, Duration::from_secs(60));

    assert_eq!(cache.invalidate_namespace("collections"), 2);
    assert_eq!(cache.get::<u8>(&CacheKey::new("screens", "patients")), Some(3));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.stats().invalidations, 2);
}

#[test]
fn clear_empties_cache() {
    let cache = TtlCache::new();
    cache.set(key("a"), 1u8, Duration::from_secs(60));
    cache.set(key("b"), 2u8, Duration::from_secs(60));
    cache.clear();
    assert!(cache.is_empty());
}

// ── Overwrite & types ────────────────────────────────────────────

#[test]
fn set_overwrites_and_restarts_ttl() {
    let (clock, cache) = manual_cache();
    cache.set(key("patients"), "old", Duration::from_secs(10));
    clock.advance(Duration::from_secs(8));
    cache.set(key("patients"), "new", Duration::from_secs(10));
    clock.advance(Duration::from_secs(8));
    assert_eq!(cache.get::<&str>(&key("patients")), Some("new"));
}

#[test]
fn unknown_key_is_none() {
    let cache = TtlCache::new();
    assert_eq!(cache.get::<String>(&key("nothing")), None);
    assert_eq!(cache.stats().misses, 1);
}

#[test]
fn type_mismatch_reads_as_miss_and_keeps_entry() {
    let cache = TtlCache::new();
    cache.set(key("patients"), 42u64, Duration::from_secs(60));
    assert_eq!(cache.get::<String>(&key("patients")), None);
    assert_eq!(cache.get::<u64>(&key("patients")), Some(42));
}

#[test]
fn same_name_in_different_namespaces_do_not_collide() {
    let cache = TtlCache::new();
    cache.set(CacheKey::new("collections", "patients"), 1u8, Duration::from_secs(60));
    cache.set(CacheKey::new("reports", "patients"), 2u8, Duration::from_secs(60));
    assert_eq!(cache.get::<u8>(&CacheKey::new("collections", "patients")), Some(1));
    assert_eq!(cache.get::<u8>(&CacheKey::new("reports", "patients")), Some(2));
}

#[test]
fn key_display_is_namespaced() {
    assert_eq!(key("patients").to_string(), "collections:patients");
    assert_eq!(key("patients").namespace(), "collections");
    assert_eq!(key("patients").name(), "patients");
}

// ── Config-driven TTL ────────────────────────────────────────────

#[test]
fn set_default_uses_per_name_override() {
    let clock = Arc::new(ManualClock::new());
    let cache = TtlCache::with_clock_and_config(clock.clone(), CacheConfig::default());
    cache.set_default(key("appointments"), 1u8);
    cache.set_default(key("medicines"), 2u8);
    clock.advance(Duration::from_secs(61));
    assert_eq!(cache.get::<u8>(&key("appointments")), None);
    assert_eq!(cache.get::<u8>(&key("medicines")), Some(2));
    clock.advance(Duration::from_secs(240));
    assert_eq!(cache.get::<u8>(&key("medicines")), None);
}

#[test]
fn config_ttl_lookup() {
    let config = CacheConfig::default();
    assert_eq!(config.default_ttl(), Duration::from_secs(300));
    assert_eq!(config.ttl_for("appointments"), Duration::from_secs(60));
    assert_eq!(config.ttl_for("sales"), Duration::from_secs(300));
}

#[test]
fn config_deserializes_partial_json() {
    let config: CacheConfig =
        serde_json::from_str(r#"{"default_ttl_secs": 120}"#).unwrap();
    assert_eq!(config.default_ttl_secs, 120);
    assert_eq!(config.ttl_for("patients"), Duration::from_secs(300));
}

// ── Stats ────────────────────────────────────────────────────────

#[test]
fn stats_track_hits_and_misses() {
    let cache = TtlCache::new();
    cache.set(key("patients"), 1u8, Duration::from_secs(60));
    let _ = cache.get::<u8>(&key("patients"));
    let _ = cache.get::<u8>(&key("patients"));
    let _ = cache.get::<u8>(&key("doctors"));
    assert_eq!(
        cache.stats(),
        CacheStats {
            hits: 2,
            misses: 1,
            expirations: 0,
            invalidations: 0,
        }
    );
}

// ── Clock ────────────────────────────────────────────────────────

#[test]
fn manual_clock_only_moves_when_advanced() {
    let clock = ManualClock::new();
    let t0 = clock.now();
    assert_eq!(clock.now(), t0);
    clock.advance(Duration::from_secs(5));
    assert_eq!(clock.now() - t0, Duration::from_secs(5));
}

// ── Sharing ──────────────────────────────────────────────────────

#[test]
fn shared_handle_last_write_wins() {
    let cache = Arc::new(TtlCache::new());
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || cache.set(key("counter"), i, Duration::from_secs(60)))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let value = cache.get::<u32>(&key("counter")).unwrap();
    assert!(value < 8);
    assert_eq!(cache.len(), 1);
}
