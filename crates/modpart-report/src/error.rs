//! Report error types.

use std::path::PathBuf;

/// Errors that can occur while persisting reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Filesystem failure at a specific path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ReportError {
    /// Wrap an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
