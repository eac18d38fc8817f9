//! Directory path management for volt-vue
//!
//! All paths used by volt-vue are centralized here.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "VOLT_VUE_CONFIG";

/// Get the base volt-vue directory (~/.config/volt-vue/)
pub fn get_volt_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Failed to get config directory")?
        .join("volt-vue"))
}

/// Get the config file path
///
/// `VOLT_VUE_CONFIG` wins when set, otherwise ~/.config/volt-vue/config.toml.
pub fn get_config_path() -> Result<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(get_volt_dir()?.join("config.toml")),
    }
}

/// Get the default snapshot root (the system temp dir)
///
/// Clones land in its `volt-vue-snapshot` child. This is one fixed location
/// per machine, so two concurrent clones share it.
pub fn default_snapshot_root() -> PathBuf {
    std::env::temp_dir()
}
