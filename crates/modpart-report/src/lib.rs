//! Report emission for modpart.
//!
//! Writes the computed module sets as plain-text listings and rewrites the
//! `disabled.modules` key of a persisted key/value configuration file while
//! preserving everything else in it (load-merge-store).

pub mod emit;
pub mod error;
pub mod properties;

// Re-exports for convenience.
pub use emit::{emit_listings, update_disabled_modules, EmitReport, DISABLED_MODULES_KEY};
pub use error::{ReportError, Result};
pub use properties::PropertiesFile;
