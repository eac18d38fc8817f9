use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while fetching the library and materializing components.
#[derive(Error, Debug)]
pub enum VoltError {
    #[error("failed to fetch component library: {0}")]
    Fetch(String),

    #[error("component source directory not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("component {name} not found")]
    ComponentNotFound { name: String },

    #[error("invalid command: {0}")]
    UnsupportedCommand(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl VoltError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VoltError::Io {
            path: path.into(),
            source,
        }
    }
}
