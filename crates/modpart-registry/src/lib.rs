//! Module catalog loading for modpart.
//!
//! The resolver core is driven by a [`modpart_core::ModuleUniverse`]; this
//! crate supplies the production implementation by loading a TOML catalog
//! file describing every installed module, its provided capabilities, and
//! its typed dependency edges.

pub mod catalog;
pub mod error;

// Re-exports for convenience.
pub use catalog::{load_catalog, parse_catalog};
pub use error::{CatalogError, Result};
