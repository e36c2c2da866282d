//! Application settings read from `frontdesk.toml`.
//!
//! ```toml
//! [grid]
//! default_page_size = 25
//! page_size_options = [10, 25, 50]
//!
//! [cache]
//! default_ttl_secs = 300
//!
//! [cache.ttl_overrides_secs]
//! appointments = 60
//! ```

use crate::error::ConfigResult;
use frontdesk_cache::{CacheConfig, TtlCache};
use frontdesk_grid::GridConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Grid and cache settings for the whole application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontDeskConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl FrontDeskConfig {
    /// Parses settings from TOML text.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a settings file, failing on IO or parse errors.
    pub fn read_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads settings from `path`.
    /// Falls back to defaults with a warning when the file is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::read_from(path) {
            Ok(config) => {
                info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "Failed to read config file {:?}: {}. Falling back to defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Builds the process-wide cache these settings describe.
    #[must_use]
    pub fn build_cache(&self) -> Arc<TtlCache> {
        Arc::new(TtlCache::with_config(self.cache.clone()))
    }
}
