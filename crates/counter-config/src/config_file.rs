use anyhow::{Context, Result};
use std::{
    env,
    path::{Path, PathBuf},
};

const CONFIG_FILE: &str = ".counter-app.toml";

/// Load config file content from CWD first, then home directory, then the
/// XDG config directory
///
/// Searches for:
/// 1. `.counter-app.toml` in the current working directory
/// 2. `~/.counter-app.toml`
/// 3. `<config_dir>/counter-app/config.toml`
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths()
        .into_iter()
        .find_map(|path| match std::fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                Some(content)
            }
            Err(_) => None,
        })
}

/// Read a config file named explicitly by the user
///
/// Unlike [`load_config_file`], a missing file is an error here.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    if let Ok(path) = crate::paths::app_config_path() {
        paths.push(path);
    }
    paths
}
