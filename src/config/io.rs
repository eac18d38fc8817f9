//! Configuration file I/O operations
//!
//! Loading always validates, so callers only ever see usable configs.

use super::paths::get_config_path;
use super::schema::VoltConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load configuration from the default location
///
/// Returns a default config if the file doesn't exist.
pub fn load_config() -> Result<VoltConfig> {
    let path = get_config_path()?;
    load_config_from(&path)
}

/// Load configuration from an explicit path
pub fn load_config_from(path: &Path) -> Result<VoltConfig> {
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(VoltConfig::default());
    }

    let content =
        fs::read_to_string(path).context(format!("Failed to read config: {}", path.display()))?;

    let config: VoltConfig =
        toml::from_str(&content).context(format!("Failed to parse config: {}", path.display()))?;

    if let Err(errors) = config.validate() {
        anyhow::bail!(
            "Config validation failed in {}:\n  {}",
            path.display(),
            errors.join("\n  ")
        );
    }

    tracing::debug!("Loaded config from {}", path.display());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, VoltConfig::default());
    }

    #[test]
    fn test_load_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "repository = \"https://example.com/lib.git\"\nreference = \"v4\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.repository, "https://example.com/lib.git");
        assert_eq!(config.reference.as_deref(), Some("v4"));
        assert_eq!(config.collection, "volt");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "collection = \"\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err().to_string();
        assert!(err.contains("Config validation failed"));
    }

    #[test]
    fn test_relative_snapshot_dir_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "snapshot_dir = \".\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err().to_string();
        assert!(err.contains("snapshot_dir '.' must be an absolute path"));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "collection = [").unwrap();

        let err = load_config_from(&path).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config"));
    }
}
