//! Logging to stderr using env_logger
//!
//! The logger is installed before the config is read, so config loading can
//! log. `RUST_LOG` wins when set; otherwise the level starts at
//! `DEFAULT_LEVEL` and is narrowed to the config file's `log_level` later.

use env_logger::{Builder, Env, DEFAULT_FILTER_ENV};
use log::LevelFilter;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the global logger
pub fn init() {
    let rust_log_set = std::env::var_os(DEFAULT_FILTER_ENV).is_some();
    // Without RUST_LOG the filter lets everything through and the global max
    // level does the filtering, so it can be changed after init.
    let env = Env::default().default_filter_or("trace");
    if let Err(e) = Builder::from_env(env).format_timestamp_millis().try_init() {
        eprintln!("Failed to initialize logger: {}", e);
        return;
    }
    if !rust_log_set {
        log::set_max_level(DEFAULT_LEVEL);
    }
}

/// Apply the config file's `log_level` unless `RUST_LOG` is set
pub fn apply_config_level(level: &str) {
    let rust_log_set = std::env::var_os(DEFAULT_FILTER_ENV).is_some();
    match config_level(level, rust_log_set) {
        Ok(Some(filter)) => {
            log::set_max_level(filter);
            log::debug!("Log level set to {} from config", filter);
        }
        Ok(None) => log::debug!("RUST_LOG is set, ignoring config log_level"),
        Err(e) => log::warn!("Invalid log_level {:?} in config: {}", level, e),
    }
}

fn config_level(
    level: &str,
    rust_log_set: bool,
) -> Result<Option<LevelFilter>, log::ParseLevelError> {
    if rust_log_set {
        return Ok(None);
    }
    level.trim().parse().map(Some)
}
