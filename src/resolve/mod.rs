//! Dependency resolution and materialization
//!
//! Given a snapshot's component root and a list of requested names, copies
//! the requested components plus every sibling component they import
//! (transitively) into `<destination>/<subpath>/<collection>/`.
//!
//! ## Algorithm
//!
//! ```text
//! request ──► wildcard? ──yes──► copy whole component root, done
//!                │ no
//!                ▼
//!         copy shared support (utils)
//!                │
//!                ▼
//!   ┌──► dequeue name ──► locate ──missing──► count failure (requested only)
//!   │                       │ found
//!   │                       ▼
//!   │                  copy entry
//!   │                       │
//!   │                       ▼
//!   └── enqueue unseen ◄── scan imports (unless --no-deps)
//! ```
//!
//! The queue is seeded with the request. A name is enqueued at most once,
//! so the loop terminates and nothing is copied twice.

mod copy;
pub mod entry;
mod imports;

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::WILDCARD;
use crate::error::VoltError;

pub use self::copy::copy_tree;
pub use self::entry::{Addressing, ComponentEntry, EntryKind, locate};

/// Ordered, de-duplicated component names requested by the caller
///
/// Names are compared case-insensitively and stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestSet {
    names: Vec<String>,
}

impl RequestSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.as_ref().trim().to_lowercase();
            if !name.is_empty() && !set.names.contains(&name) {
                set.names.push(name);
            }
        }
        set
    }

    /// Whether the request asks for every component
    pub fn is_wildcard(&self) -> bool {
        self.names.iter().any(|n| n == WILDCARD)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Settings that shape a single resolution
#[derive(Debug, Clone, Serialize)]
pub struct ResolveOptions {
    /// Follow relative imports to sibling components
    pub include_dependencies: bool,

    /// Base directory below the destination root (`None` = the root itself)
    pub destination_subpath: Option<PathBuf>,

    /// Folder created below the base directory
    pub collection: String,

    pub addressing: Addressing,

    /// Name of the support module copied with every install
    pub shared_support: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            include_dependencies: true,
            destination_subpath: Some(PathBuf::from("src")),
            collection: "volt".to_string(),
            addressing: Addressing::default(),
            shared_support: "utils".to_string(),
        }
    }
}

impl ResolveOptions {
    /// Directory that receives the copied entries
    ///
    /// The subpath is always joined onto `destination_root`; a leading root
    /// or drive prefix is dropped, so `/lib` means `<root>/lib`.
    pub fn destination_dir(&self, destination_root: &Path) -> PathBuf {
        let mut dir = destination_root.to_path_buf();
        if let Some(subpath) = &self.destination_subpath {
            dir.extend(
                subpath
                    .components()
                    .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_))),
            );
        }
        dir.join(&self.collection)
    }
}

/// What a resolution copied and why
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    /// The whole component root was copied without analysis
    pub wildcard: bool,

    /// Directory the entries were copied into
    pub destination: PathBuf,

    /// Requested names that were copied (top-level entries for a wildcard)
    pub succeeded: Vec<String>,

    /// Requested names that could not be located
    pub failed: Vec<String>,

    /// Names copied only because another component imports them
    pub pulled_in: Vec<String>,

    /// Dependencies found per analyzed component
    pub dependencies: BTreeMap<String, BTreeSet<String>>,

    /// Shared support entries copied; empty when the library has none
    pub shared_support: Vec<PathBuf>,
}

/// Overall verdict derived from a [`ResolutionResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    FullSuccess,
    PartialSuccess,
    TotalFailure,
}

impl Outcome {
    pub fn is_fatal(self) -> bool {
        self == Outcome::TotalFailure
    }
}

impl ResolutionResult {
    pub fn outcome(&self) -> Outcome {
        if self.wildcard {
            return Outcome::FullSuccess;
        }
        match (self.succeeded.len(), self.failed.len()) {
            (0, _) => Outcome::TotalFailure,
            (_, 0) => Outcome::FullSuccess,
            _ => Outcome::PartialSuccess,
        }
    }
}

/// Working set of one resolution
struct ResolutionState<'a> {
    request: &'a RequestSet,
    pending: VecDeque<String>,
    /// Every name ever enqueued
    seen: HashSet<String>,
    /// Copied names in copy order
    processed: Vec<String>,
    processed_set: HashSet<String>,
    dependencies: BTreeMap<String, BTreeSet<String>>,
    succeeded: Vec<String>,
    failed: Vec<String>,
}

impl<'a> ResolutionState<'a> {
    fn new(request: &'a RequestSet) -> Self {
        let mut state = Self {
            request,
            pending: VecDeque::new(),
            seen: HashSet::new(),
            processed: Vec::new(),
            processed_set: HashSet::new(),
            dependencies: BTreeMap::new(),
            succeeded: Vec::new(),
            failed: Vec::new(),
        };
        for name in request.names() {
            state.enqueue(name);
        }
        state
    }

    fn enqueue(&mut self, name: &str) -> bool {
        if self.seen.insert(name.to_string()) {
            self.pending.push_back(name.to_string());
            true
        } else {
            false
        }
    }

    fn mark_processed(&mut self, name: &str) {
        if self.processed_set.insert(name.to_string()) {
            self.processed.push(name.to_string());
        }
        if self.request.contains(name) {
            self.succeeded.push(name.to_string());
        }
    }

    fn into_result(self, destination: PathBuf, shared_support: Vec<PathBuf>) -> ResolutionResult {
        let pulled_in = self
            .processed
            .into_iter()
            .filter(|name| !self.request.contains(name))
            .collect();

        ResolutionResult {
            wildcard: false,
            destination,
            succeeded: self.succeeded,
            failed: self.failed,
            pulled_in,
            dependencies: self.dependencies,
            shared_support,
        }
    }
}

/// Copy the requested components and their local dependencies
///
/// `snapshot_root` is the snapshot's component directory; entries land in
/// [`ResolveOptions::destination_dir`] of `destination_root`.
///
/// Names that cannot be located are recorded in the result rather than
/// returned as errors. Any other failure (I/O while copying or reading,
/// missing component directory for a wildcard request) aborts the run.
pub fn resolve(
    request: &RequestSet,
    snapshot_root: &Path,
    destination_root: &Path,
    options: &ResolveOptions,
) -> Result<ResolutionResult, VoltError> {
    let destination = options.destination_dir(destination_root);
    tracing::debug!("Target directory: {}", destination.display());

    if request.is_wildcard() {
        return copy_everything(snapshot_root, destination);
    }

    let shared_support = copy_shared_support(snapshot_root, &destination, &options.shared_support)?;

    let mut state = ResolutionState::new(request);

    while let Some(name) = state.pending.pop_front() {
        if state.processed_set.contains(&name) {
            continue;
        }
        let requested = request.contains(&name);

        let entry = match entry::locate(snapshot_root, &name, &options.addressing) {
            Ok(entry) => entry,
            Err(VoltError::ComponentNotFound { .. } | VoltError::SourceNotFound { .. }) => {
                if requested {
                    tracing::debug!("Component {} not found", name);
                    state.failed.push(name);
                } else {
                    tracing::warn!("Dependency {} not found, skipping", name);
                }
                continue;
            }
            Err(e) => return Err(e),
        };

        copy_tree(
            &snapshot_root.join(&entry.relative_path),
            &destination.join(&entry.relative_path),
        )?;
        state.mark_processed(&name);
        tracing::debug!(
            "Copied component: {} ({})",
            name,
            entry.relative_path.display()
        );

        if !options.include_dependencies {
            tracing::debug!("Skipping dependency analysis for {} (--no-deps)", name);
            continue;
        }

        analyze(&mut state, snapshot_root, &entry, options)?;
    }

    Ok(state.into_result(destination, shared_support))
}

/// Record and enqueue the sibling components `entry` imports
fn analyze(
    state: &mut ResolutionState<'_>,
    root: &Path,
    entry: &ComponentEntry,
    options: &ResolveOptions,
) -> Result<(), VoltError> {
    let Some(source_path) = entry.canonical_source(root, &options.addressing) else {
        tracing::debug!("No source file to analyze for {}", entry.name);
        return Ok(());
    };

    let bytes = fs::read(&source_path).map_err(|e| VoltError::io(&source_path, e))?;
    let source = String::from_utf8_lossy(&bytes);

    let mut found = BTreeSet::new();
    for dependency in imports::scan(&source, &options.addressing) {
        if dependency.eq_ignore_ascii_case(&options.shared_support) || dependency == entry.name {
            continue;
        }
        found.insert(dependency.clone());

        // Requested names are processed on their own account
        if state.request.contains(&dependency) {
            continue;
        }
        if state.enqueue(&dependency) {
            tracing::debug!("Found dependency in {}: {}", entry.name, dependency);
        }
    }

    if !found.is_empty() {
        state.dependencies.insert(entry.name.clone(), found);
    }

    Ok(())
}

fn copy_everything(root: &Path, destination: PathBuf) -> Result<ResolutionResult, VoltError> {
    if !root.is_dir() {
        return Err(VoltError::SourceNotFound {
            path: root.to_path_buf(),
        });
    }

    let entries = entry::list_entries(root)?;
    copy_tree(root, &destination)?;
    tracing::debug!("Copied {} entries from {}", entries.len(), root.display());

    Ok(ResolutionResult {
        wildcard: true,
        destination,
        succeeded: entries,
        ..ResolutionResult::default()
    })
}

fn copy_shared_support(
    root: &Path,
    destination: &Path,
    name: &str,
) -> Result<Vec<PathBuf>, VoltError> {
    let entries = entry::shared_support_entries(root, name)?;
    if entries.is_empty() {
        tracing::debug!("Shared support module '{}' not found in the repository", name);
    }
    for relative in &entries {
        copy_tree(&root.join(relative), &destination.join(relative))?;
        tracing::debug!("Copied shared support: {}", relative.display());
    }
    Ok(entries)
}
