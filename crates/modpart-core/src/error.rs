//! Core error types.

use crate::module::ModuleId;

/// Errors that abort a resolution run.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// One or more configured root modules are absent from the universe.
    ///
    /// Aggregated eagerly before traversal starts; never a partial result.
    #[error("root modules not found: {}", .missing.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", "))]
    RootsNotFound { missing: Vec<ModuleId> },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
