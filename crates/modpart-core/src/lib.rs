//! Core module-set computation for pluggable platform distributions.
//!
//! Given a universe of installed modules (each declaring dependencies and
//! provided capabilities) and a hard-coded root-module list per product
//! extension, this crate computes the transitive closure of modules each
//! extension requires, reconciles the overlap between the optional
//! extensions into the shared baseline, and derives the final
//! enabled/disabled partition.
//!
//! # Architecture
//!
//! - [`ModuleUniverse`] — dependency-injected view of all installed modules
//! - [`CapabilityIndex`] — capability name → provider modules, built once per run
//! - [`resolve`] — work-list closure resolver, one call per extension
//! - [`partition`] — pure set algebra over the three closures
//!
//! Resolution is best-effort: inconsistent module metadata (dangling
//! references, unsatisfied or ambiguous capabilities) degrades the closure
//! and surfaces as [`Diagnostic`]s rather than aborting the run. The only
//! fatal condition is a configured root module missing from the universe.

pub mod capability;
pub mod diagnostic;
pub mod error;
pub mod extension;
pub mod module;
pub mod partition;
pub mod resolve;
pub mod universe;

// Re-exports for convenience.
pub use capability::CapabilityIndex;
pub use diagnostic::{Diagnostic, Severity};
pub use error::{ResolveError, Result};
pub use extension::Extension;
pub use module::{Dependency, Module, ModuleId};
pub use partition::{partition, PartitionResult};
pub use resolve::{resolve, Resolution};
pub use universe::{MemoryUniverse, ModuleUniverse};
