//! Per-user console paths.
//!
//! - `~/.pbgui/config.toml` - application configuration

use std::path::PathBuf;

/// The console home directory (`~/.pbgui/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pbgui")
}

/// Default application config (`~/.pbgui/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
