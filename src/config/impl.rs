use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to defaults if `init_config`
/// was never called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration from `path` (TOML, optional) and the environment
///
/// Calling it again replaces the previously loaded configuration.
///
/// # Examples
/// ```no_run
/// use snaplink::config::init_config;
/// init_config("snaplink.toml").unwrap();
/// ```
pub fn init_config(path: &str) -> Result<()> {
    let loaded = StaticConfig::load(path)?;
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .store(Arc::new(loaded));
    Ok(())
}
