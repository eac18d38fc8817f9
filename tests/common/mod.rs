//! Common test utilities and fixtures
//!
//! This module provides shared helpers for volt-vue CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Component directory inside a library checkout
pub const COMPONENTS_PATH: &str = "apps/volt/volt";

/// A fake library checkout, an empty project and an isolated config
pub struct Workspace {
    pub temp: TempDir,
    pub checkout: PathBuf,
    pub project: PathBuf,
    pub config: PathBuf,
}

impl Workspace {
    /// Workspace whose checkout contains `files` below the component directory
    pub fn with_components(files: &[(&str, &str)]) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let checkout = temp.path().join("primevue");
        let project = temp.path().join("project");
        let config = temp.path().join("config.toml");

        std::fs::create_dir_all(checkout.join(COMPONENTS_PATH)).unwrap();
        std::fs::create_dir_all(&project).unwrap();

        for (path, content) in files {
            let path = checkout.join(COMPONENTS_PATH).join(path);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }

        let snapshot = temp.path().join("snapshot");
        std::fs::write(
            &config,
            format!("snapshot_dir = {:?}\n", snapshot.display().to_string()),
        )
        .unwrap();

        Self {
            temp,
            checkout,
            project,
            config,
        }
    }

    /// The standard fixture: panel → button, panel → utils, button → badge
    pub fn volt() -> Self {
        Self::with_components(&[
            ("utils.ts", "export const ptViewMerge = () => {};"),
            (
                "Panel.vue",
                "<script setup>\nimport Button from './Button.vue';\nimport { ptViewMerge } from './utils';\n</script>",
            ),
            ("Button.vue", "<script setup>\nimport Badge from './Badge.vue';\n</script>"),
            ("Badge.vue", "<template><span /></template>"),
            ("Card.vue", "<template><div /></template>"),
        ])
    }

    /// `volt-vue` running in the project directory against the local checkout
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("add").arg("--source").arg(&self.checkout);
        cmd
    }

    /// `volt-vue` with the isolated config but no arguments
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("volt-vue").unwrap();
        cmd.current_dir(&self.project)
            .env("VOLT_VUE_CONFIG", &self.config)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn installed(&self, relative: &str) -> bool {
        self.project.join(relative).exists()
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}
