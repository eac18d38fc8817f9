//! The `add` command
//!
//! Fetches the component library, resolves the requested components into the
//! project and prints the result. A cloned snapshot is removed before the
//! command returns, on success and on every error path.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{self, VoltConfig};
use crate::error::VoltError;
use crate::resolve::{self, Outcome, RequestSet, ResolveOptions};
use crate::source::ContentSource;

use super::output;

/// Options accepted by `volt-vue add`
#[derive(Debug, Clone, Serialize)]
pub struct AddOptions {
    /// Component names, or `all`
    pub components: Vec<String>,

    /// Install below `src/` (ignored when `outdir` is set)
    pub src_dir: bool,

    /// Explicit base directory, relative to the project root
    pub outdir: Option<PathBuf>,

    /// Follow imports to sibling components
    pub deps: bool,

    /// Local checkout used instead of cloning
    pub source: Option<PathBuf>,

    /// Repository URL overriding the configured one
    pub repository: Option<String>,

    pub verbose: bool,
}

impl AddOptions {
    /// Base directory below the project root: `<outdir>`, `src` or nothing
    fn destination_subpath(&self) -> Option<PathBuf> {
        match &self.outdir {
            Some(outdir) => Some(outdir.clone()),
            None if self.src_dir => Some(PathBuf::from("src")),
            None => None,
        }
    }

    fn content_source(&self, config: &VoltConfig) -> ContentSource {
        match &self.source {
            Some(path) => ContentSource::Local { path: path.clone() },
            None => ContentSource::Git {
                url: self
                    .repository
                    .clone()
                    .unwrap_or_else(|| config.repository.clone()),
                reference: config.reference.clone(),
            },
        }
    }

    fn resolve_options(&self, config: &VoltConfig) -> ResolveOptions {
        ResolveOptions {
            include_dependencies: self.deps,
            destination_subpath: self.destination_subpath(),
            collection: config.collection.clone(),
            addressing: config.addressing.clone(),
            shared_support: config.shared_support.clone(),
        }
    }
}

/// Add components to the project rooted at `project_dir`
///
/// Returns the outcome so the caller can pick the exit code; a
/// [`Outcome::TotalFailure`] has already been reported to the user.
pub async fn add(options: AddOptions, config: &VoltConfig, project_dir: &Path) -> Result<Outcome> {
    let request = RequestSet::new(&options.components);
    if request.is_empty() {
        anyhow::bail!("no components specified, example: volt-vue add button");
    }

    let snapshot_root = config
        .snapshot_dir
        .clone()
        .unwrap_or_else(config::default_snapshot_root);
    let source = options.content_source(config);
    let resolve_options = options.resolve_options(config);

    tracing::debug!("Components to add: {}", request.names().join(", "));
    tracing::debug!(
        "Options: {}",
        serde_json::to_string(&options).unwrap_or_default()
    );
    tracing::debug!("Source: {}", source);
    tracing::debug!(
        "Auto-install dependencies: {}",
        if options.deps { "Yes" } else { "No" }
    );

    let snapshot = source
        .fetch(&snapshot_root, &config.components_path)
        .await
        .context("Failed to fetch component library")?;

    let result = match resolve::resolve(
        &request,
        &snapshot.component_root(),
        project_dir,
        &resolve_options,
    ) {
        Ok(result) => result,
        Err(VoltError::SourceNotFound { path }) if request.is_wildcard() => {
            tracing::debug!("Missing component directory: {}", path.display());
            eprintln!("❌ Volt components directory not found!");
            return Ok(Outcome::TotalFailure);
        }
        Err(e) => return Err(e).context("Failed to add components"),
    };

    tracing::debug!(
        "Resolution result: {}",
        serde_json::to_string(&result).unwrap_or_default()
    );

    output::print_report(&result, options.deps, options.verbose);

    snapshot
        .discard()
        .context("Failed to remove temporary directory")?;

    Ok(result.outcome())
}
