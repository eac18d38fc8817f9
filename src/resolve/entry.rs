//! Component entry lookup
//!
//! Names are matched in two phases: the expected on-disk form is checked
//! directly, then the directory listing is scanned case-insensitively. The
//! second phase never depends on the filesystem being case-insensitive.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::VoltError;

/// How component names map onto entries of the component root
///
/// One mode is used per library; modes are never mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Addressing {
    /// `button` → `Button.<extension>`
    File {
        #[serde(default = "default_extension")]
        extension: String,
    },
    /// `button` → `button/`, source read from the first entry file present
    Directory {
        #[serde(default = "default_entry_files")]
        entry_files: Vec<String>,
    },
}

fn default_extension() -> String {
    "vue".to_string()
}

fn default_entry_files() -> Vec<String> {
    ["index.vue", "index.ts", "index.js"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Addressing {
    fn default() -> Self {
        Addressing::File {
            extension: default_extension(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// A located component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentEntry {
    /// Logical (lowercase) name
    pub name: String,
    /// Path relative to the component root, with on-disk casing
    pub relative_path: PathBuf,
    pub kind: EntryKind,
}

impl ComponentEntry {
    /// File whose imports describe this component's dependencies
    pub fn canonical_source(&self, root: &Path, addressing: &Addressing) -> Option<PathBuf> {
        let path = root.join(&self.relative_path);
        match (self.kind, addressing) {
            (EntryKind::File, _) => Some(path),
            (EntryKind::Directory, Addressing::Directory { entry_files }) => entry_files
                .iter()
                .map(|file| path.join(file))
                .find(|candidate| candidate.is_file()),
            (EntryKind::Directory, Addressing::File { .. }) => None,
        }
    }
}

/// Resolve a component name against the component root
///
/// Returns `SourceNotFound` when the root itself is missing and
/// `ComponentNotFound` when no entry matches.
pub fn locate(
    root: &Path,
    name: &str,
    addressing: &Addressing,
) -> Result<ComponentEntry, VoltError> {
    // Names address top-level entries only
    if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
        return Err(VoltError::ComponentNotFound {
            name: name.to_string(),
        });
    }

    let (expected, kind) = match addressing {
        Addressing::File { extension } => {
            (format!("{}.{}", capitalize(name), extension), EntryKind::File)
        }
        Addressing::Directory { .. } => (name.to_string(), EntryKind::Directory),
    };

    if matches_kind(&root.join(&expected), kind) {
        return Ok(ComponentEntry {
            name: name.to_string(),
            relative_path: PathBuf::from(expected),
            kind,
        });
    }

    let found = list_entries(root)?
        .into_iter()
        .find(|file_name| {
            file_name.eq_ignore_ascii_case(&expected) && matches_kind(&root.join(file_name), kind)
        });

    match found {
        Some(file_name) => Ok(ComponentEntry {
            name: name.to_string(),
            relative_path: PathBuf::from(file_name),
            kind,
        }),
        None => Err(VoltError::ComponentNotFound {
            name: name.to_string(),
        }),
    }
}

/// Top-level entries that make up the shared support module
///
/// Matches a directory named `name` or any file whose stem is `name`
/// (`utils.ts`, `utils.js`, ...). A missing root yields no entries.
pub fn shared_support_entries(root: &Path, name: &str) -> Result<Vec<PathBuf>, VoltError> {
    let entries = match list_entries(root) {
        Ok(entries) => entries,
        Err(VoltError::SourceNotFound { .. }) => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    Ok(entries
        .into_iter()
        .map(PathBuf::from)
        .filter(|relative| {
            let path = root.join(relative);
            let key = if path.is_dir() {
                relative.file_name()
            } else {
                relative.file_stem()
            };
            key.and_then(|k| k.to_str())
                .is_some_and(|k| k.eq_ignore_ascii_case(name))
        })
        .collect())
}

/// Sorted names of the entries directly inside `root`
pub fn list_entries(root: &Path) -> Result<Vec<String>, VoltError> {
    let read_dir = match fs::read_dir(root) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(VoltError::SourceNotFound {
                path: root.to_path_buf(),
            });
        }
        Err(e) => return Err(VoltError::io(root, e)),
    };

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| VoltError::io(root, e))?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

fn matches_kind(path: &Path, kind: EntryKind) -> bool {
    match kind {
        EntryKind::File => path.is_file(),
        EntryKind::Directory => path.is_dir(),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_mode() -> Addressing {
        Addressing::default()
    }

    fn dir_mode() -> Addressing {
        Addressing::Directory {
            entry_files: vec!["index.vue".to_string()],
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("button"), "Button");
        assert_eq!(capitalize("Button"), "Button");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_locate_expected_form() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Button.vue"), "").unwrap();

        let entry = locate(temp_dir.path(), "button", &file_mode()).unwrap();
        assert_eq!(entry.relative_path, PathBuf::from("Button.vue"));
        assert_eq!(entry.kind, EntryKind::File);
        assert_eq!(entry.name, "button");
    }

    #[test]
    fn test_locate_falls_back_to_listing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ToggleSwitch.vue"), "").unwrap();

        let entry = locate(temp_dir.path(), "toggleswitch", &file_mode()).unwrap();
        assert_eq!(entry.relative_path, PathBuf::from("ToggleSwitch.vue"));
    }

    #[test]
    fn test_locate_ignores_other_extensions() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Button.ts"), "").unwrap();

        let err = locate(temp_dir.path(), "button", &file_mode()).unwrap_err();
        assert!(matches!(err, VoltError::ComponentNotFound { ref name } if name == "button"));
    }

    #[test]
    fn test_locate_directory_mode() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("DatePicker")).unwrap();
        fs::write(temp_dir.path().join("datepicker.vue"), "").unwrap();

        let entry = locate(temp_dir.path(), "datepicker", &dir_mode()).unwrap();
        assert_eq!(entry.relative_path, PathBuf::from("DatePicker"));
        assert_eq!(entry.kind, EntryKind::Directory);
    }

    #[test]
    fn test_locate_rejects_paths() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("lib")).unwrap();
        fs::write(temp_dir.path().join("Secret.vue"), "").unwrap();

        let root = temp_dir.path().join("lib");
        for name in ["../secret", "a/b", ".hidden"] {
            let err = locate(&root, name, &file_mode()).unwrap_err();
            assert!(matches!(err, VoltError::ComponentNotFound { .. }), "{}", name);
        }
    }

    #[test]
    fn test_locate_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let err = locate(&temp_dir.path().join("missing"), "button", &file_mode()).unwrap_err();
        assert!(matches!(err, VoltError::SourceNotFound { .. }));
    }

    #[test]
    fn test_canonical_source_directory_mode() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("panel")).unwrap();
        fs::write(temp_dir.path().join("panel/index.ts"), "").unwrap();

        let addressing = Addressing::Directory {
            entry_files: vec!["index.vue".to_string(), "index.ts".to_string()],
        };
        let entry = locate(temp_dir.path(), "panel", &addressing).unwrap();

        assert_eq!(
            entry.canonical_source(temp_dir.path(), &addressing),
            Some(temp_dir.path().join("panel/index.ts"))
        );
    }

    #[test]
    fn test_canonical_source_missing_entry_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("panel")).unwrap();

        let entry = locate(temp_dir.path(), "panel", &dir_mode()).unwrap();
        assert_eq!(entry.canonical_source(temp_dir.path(), &dir_mode()), None);
    }

    #[test]
    fn test_shared_support_file_and_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("utils.ts"), "").unwrap();
        fs::create_dir(temp_dir.path().join("utils")).unwrap();
        fs::write(temp_dir.path().join("Button.vue"), "").unwrap();

        let entries = shared_support_entries(temp_dir.path(), "utils").unwrap();
        assert_eq!(entries, vec![PathBuf::from("utils"), PathBuf::from("utils.ts")]);
    }

    #[test]
    fn test_shared_support_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let entries = shared_support_entries(&temp_dir.path().join("missing"), "utils").unwrap();
        assert!(entries.is_empty());
    }
}
