use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// TTL settings for cached listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL for keys without an override.
    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: u64,
    /// Per-name overrides, keyed by [`CacheKey::name`](crate::CacheKey::name).
    #[serde(default = "default_overrides")]
    pub ttl_overrides_secs: BTreeMap<String, u64>,
}

fn default_ttl_secs() -> u64 {
    300
}

fn default_overrides() -> BTreeMap<String, u64> {
    BTreeMap::from([
        ("patients".to_string(), 300),
        ("doctors".to_string(), 300),
        ("appointments".to_string(), 60),
    ])
}

impl CacheConfig {
    #[must_use]
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }

    /// TTL for entries named `name`, falling back to the default.
    #[must_use]
    pub fn ttl_for(&self, name: &str) -> Duration {
        self.ttl_overrides_secs
            .get(name)
            .map_or_else(|| self.default_ttl(), |secs| Duration::from_secs(*secs))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: default_ttl_secs(),
            ttl_overrides_secs: default_overrides(),
        }
    }
}
