//! Catalog error types.

use std::path::PathBuf;

/// Errors that can occur while loading a module catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two catalog entries share the same code name base.
    #[error("duplicate module in catalog: {name}")]
    DuplicateModule { name: String },

    /// A catalog entry has an empty name.
    #[error("catalog entry {index} has an empty module name")]
    EmptyModuleName { index: usize },

    /// Catalog file could not be read.
    #[error("cannot read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
