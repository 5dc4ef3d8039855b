//! Configuration directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/counter-app/`
//! - macOS: `~/Library/Application Support/counter-app/`
//! - Windows: `%APPDATA%\counter-app\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "counter-app";

/// Get the application config directory (not created if missing)
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_path() {
        // No config directory without HOME/XDG variables
        if dirs::config_dir().is_none() {
            assert!(app_config_path().is_err());
            return;
        }
        let path = app_config_path().unwrap();
        assert!(path.ends_with("counter-app/config.toml"));
    }
}
