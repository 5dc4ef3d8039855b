//! Configuration for counter-app
//!
//! This crate provides:
//! - Config file discovery (CWD, home directory, XDG config directory)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{load_config_file, read_config_file};
pub use paths::{app_config_path, config_dir};
