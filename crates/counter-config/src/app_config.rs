//! Application configuration
//!
//! Configuration loaded from `.counter-app.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from `.counter-app.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is not set (off, error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Value the `counter` slice starts from; reducer default when unset
    #[serde(default)]
    pub initial_counter: Option<i64>,

    /// Print the state as a JSON line after every dispatch
    #[serde(default = "default_echo_state")]
    pub echo_state: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_echo_state() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            initial_counter: None,
            echo_state: default_echo_state(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = crate::read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.initial_counter, None);
        assert!(config.echo_state);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            log_level = "debug"
            initial_counter = 5
            echo_state = false
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.initial_counter, Some(5));
        assert!(!config.echo_state);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            initial_counter = -2
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.initial_counter, Some(-2));
        // Other fields should use defaults
        assert_eq!(config.log_level, "info");
        assert!(config.echo_state);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "echo_state = false").unwrap();
        let config = AppConfig::load_from(file.path()).unwrap();
        assert!(!config.echo_state);
    }

    #[test]
    fn test_load_from_invalid_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "initial_counter = \"many\"").unwrap();
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
