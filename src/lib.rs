pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod resolve;
pub mod source;

pub use error::VoltError;
pub use resolve::{Addressing, Outcome, RequestSet, ResolutionResult, ResolveOptions, resolve};
pub use source::{ContentSource, SNAPSHOT_DIR_NAME, Snapshot, SnapshotDir};

/// Request name that selects every entry in the component root
pub const WILDCARD: &str = "all";
