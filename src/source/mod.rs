//! Content source provider
//!
//! Produces a local, read-only snapshot of the upstream component library.
//! A cloned snapshot lives in a tool-owned [`SnapshotDir`] carried by the
//! [`Snapshot`]; dropping it removes the tree, so cleanup happens on every
//! exit path. Local checkouts are borrowed and never removed.

mod git;

use std::path::{Path, PathBuf};

use crate::error::VoltError;

/// Name of the folder a clone is written to inside the snapshot root
pub const SNAPSHOT_DIR_NAME: &str = "volt-vue-snapshot";

/// Owned location of a cloned repository snapshot
///
/// Always the [`SNAPSHOT_DIR_NAME`] child of a snapshot root, never the root
/// itself. The directory is removed by [`SnapshotDir::discard`] or, at the
/// latest, when the handle is dropped.
#[derive(Debug)]
pub struct SnapshotDir {
    path: PathBuf,
}

impl SnapshotDir {
    pub fn within(snapshot_root: &Path) -> Self {
        Self {
            path: snapshot_root.join(SNAPSHOT_DIR_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the snapshot tree
    ///
    /// Safe to call repeatedly and on a path that was never created.
    pub fn discard(&self) -> Result<(), VoltError> {
        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => {
                tracing::debug!("Removed snapshot directory {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(VoltError::io(&self.path, e)),
        }
    }
}

impl Drop for SnapshotDir {
    fn drop(&mut self) {
        if let Err(e) = self.discard() {
            tracing::warn!("Failed to clean up snapshot: {}", e);
        }
    }
}

/// A fetched library tree available on the local filesystem
#[derive(Debug)]
pub struct Snapshot {
    root: PathBuf,
    components_path: PathBuf,
    owned: Option<SnapshotDir>,
}

impl Snapshot {
    /// Snapshot borrowing an existing tree
    pub fn borrowed(root: impl Into<PathBuf>, components_path: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            components_path: components_path.into(),
            owned: None,
        }
    }

    fn owned(dir: SnapshotDir, components_path: &Path) -> Self {
        Self {
            root: dir.path().to_path_buf(),
            components_path: components_path.to_path_buf(),
            owned: Some(dir),
        }
    }

    /// Repository root of the snapshot
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the component entries
    pub fn component_root(&self) -> PathBuf {
        self.root.join(&self.components_path)
    }

    pub fn has_component_root(&self) -> bool {
        self.component_root().is_dir()
    }

    /// Remove the tree if this snapshot owns it
    pub fn discard(self) -> Result<(), VoltError> {
        match &self.owned {
            Some(dir) => dir.discard(),
            None => Ok(()),
        }
    }
}

/// Where the component library comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Shallow clone of a git repository below the snapshot root
    Git {
        url: String,
        reference: Option<String>,
    },
    /// Existing checkout used in place; never removed
    Local { path: PathBuf },
}

impl ContentSource {
    /// Make the library available locally
    ///
    /// Git sources clone into the [`SNAPSHOT_DIR_NAME`] child of
    /// `snapshot_root`; nothing else below the root is touched. A failed clone
    /// removes whatever partial tree it left behind. A snapshot without the
    /// expected component directory is still returned; the missing directory
    /// is only reported.
    pub async fn fetch(
        &self,
        snapshot_root: &Path,
        components_path: &Path,
    ) -> Result<Snapshot, VoltError> {
        let snapshot = match self {
            ContentSource::Git { url, reference } => {
                let dir = SnapshotDir::within(snapshot_root);
                tracing::debug!("Temporary directory: {}", dir.path().display());
                dir.discard()?;
                // A failed clone drops `dir`, which removes the partial tree
                git::shallow_clone(url, reference.as_deref(), dir.path()).await?;
                Snapshot::owned(dir, components_path)
            }
            ContentSource::Local { path } => {
                if !path.is_dir() {
                    return Err(VoltError::Fetch(format!(
                        "local source '{}' is not a directory",
                        path.display()
                    )));
                }
                Snapshot::borrowed(path, components_path)
            }
        };

        if !snapshot.has_component_root() {
            tracing::warn!(
                "Component directory {} not found in snapshot",
                snapshot.component_root().display()
            );
        }

        Ok(snapshot)
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Git {
                url,
                reference: Some(r),
            } => write!(f, "{}@{}", url, r),
            ContentSource::Git { url, .. } => write!(f, "{}", url),
            ContentSource::Local { path } => write!(f, "{}", path.display()),
        }
    }
}
