//! Configuration schema for volt-vue
//!
//! Every field has a default matching the upstream Volt library, so partial
//! config files are valid.

use serde::{Deserialize, Serialize};
use std::path::{Component, PathBuf};

use crate::resolve::Addressing;

/// Upstream repository cloned when no local source is given
pub const DEFAULT_REPOSITORY: &str = "https://github.com/primefaces/primevue.git";

/// Main configuration structure for volt-vue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VoltConfig {
    /// Git URL of the component library
    pub repository: String,

    /// Branch or tag to clone instead of the default branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Component root inside the repository
    pub components_path: PathBuf,

    /// Folder created under the destination base
    pub collection: String,

    /// Shared support module copied with every install
    pub shared_support: String,

    /// How component names map to entries in the component root
    pub addressing: Addressing,

    /// Absolute directory below which the repository snapshot is cloned
    ///
    /// Only its `volt-vue-snapshot` child is ever created or removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for VoltConfig {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            reference: None,
            components_path: PathBuf::from("apps/volt/volt"),
            collection: "volt".to_string(),
            shared_support: "utils".to_string(),
            addressing: Addressing::default(),
            snapshot_dir: None,
        }
    }
}

impl VoltConfig {
    /// Validate the configuration for common errors
    ///
    /// Returns Ok(()) if valid, or Err with every problem found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.repository.trim().is_empty() {
            errors.push("repository must not be empty".to_string());
        }

        if self.components_path.is_absolute()
            || self
                .components_path
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            errors.push(format!(
                "components_path '{}' must be relative to the repository root",
                self.components_path.display()
            ));
        }

        for (key, value) in [
            ("collection", &self.collection),
            ("shared_support", &self.shared_support),
        ] {
            if let Err(e) = validate_plain_name(value) {
                errors.push(format!("{}: {}", key, e));
            }
        }

        if let Some(dir) = &self.snapshot_dir
            && !dir.is_absolute()
        {
            errors.push(format!(
                "snapshot_dir '{}' must be an absolute path",
                dir.display()
            ));
        }

        match &self.addressing {
            Addressing::File { extension } => {
                if extension.is_empty() || extension.starts_with('.') {
                    errors.push(format!(
                        "addressing.extension '{}' must be non-empty and without a leading dot",
                        extension
                    ));
                }
            }
            Addressing::Directory { entry_files } => {
                if entry_files.is_empty() {
                    errors.push("addressing.entry_files must list at least one file".to_string());
                }
                for file in entry_files {
                    if let Err(e) = validate_plain_name(file) {
                        errors.push(format!("addressing.entry_files: {}", e));
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A plain name is a single, non-empty path segment
fn validate_plain_name(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("name must not be empty".to_string());
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(format!("'{}' must be a single path segment", value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = VoltConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.collection, "volt");
        assert_eq!(config.components_path, PathBuf::from("apps/volt/volt"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: VoltConfig = toml::from_str("collection = \"ui\"").unwrap();
        assert_eq!(config.collection, "ui");
        assert_eq!(config.repository, DEFAULT_REPOSITORY);
        assert_eq!(config.addressing, Addressing::default());
    }

    #[test]
    fn test_directory_addressing_from_toml() {
        let toml = r#"
            [addressing]
            mode = "directory"
            entry_files = ["index.tsx"]
        "#;
        let config: VoltConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.addressing,
            Addressing::Directory {
                entry_files: vec!["index.tsx".to_string()]
            }
        );
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = VoltConfig {
            repository: " ".to_string(),
            collection: "a/b".to_string(),
            shared_support: String::new(),
            addressing: Addressing::File {
                extension: ".vue".to_string(),
            },
            ..VoltConfig::default()
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("repository")));
        assert!(errors.iter().any(|e| e.starts_with("collection")));
        assert!(errors.iter().any(|e| e.starts_with("shared_support")));
        assert!(errors.iter().any(|e| e.contains("leading dot")));
    }

    #[test]
    fn test_validate_rejects_relative_snapshot_dir() {
        for dir in [".", "", "snapshots"] {
            let config = VoltConfig {
                snapshot_dir: Some(PathBuf::from(dir)),
                ..VoltConfig::default()
            };
            let errors = config.validate().unwrap_err();
            assert_eq!(errors.len(), 1, "{:?}", dir);
            assert!(errors[0].contains("snapshot_dir"));
        }

        let config = VoltConfig {
            snapshot_dir: Some(std::env::temp_dir()),
            ..VoltConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_escaping_components_path() {
        let config = VoltConfig {
            components_path: PathBuf::from("../elsewhere"),
            ..VoltConfig::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors[0].contains("components_path"));
    }
}
