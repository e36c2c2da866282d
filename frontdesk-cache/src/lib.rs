//! In-memory TTL cache for front-desk reference data.
//!
//! Patient, doctor and appointment listings are read far more often than they
//! change, so screens keep them here for a few minutes. The cache is purely an
//! optimization: every caller must behave correctly when it misses.
//!
//! - [`TtlCache`] — key → value store with per-entry expiry
//! - [`CacheKey`] — namespaced key (`"collections:patients"`)
//! - [`Clock`] — time source, swappable for [`ManualClock`] in tests
//!
//! Expiry is lazy: an entry is dropped when a `get` finds it stale, or when it
//! is invalidated. There is no background sweep and no size bound.

mod cache;
mod clock;
mod config;
mod key;
mod stats;

pub use cache::TtlCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use key::CacheKey;
pub use stats::CacheStats;
