//! `modpart check` — resolve every extension and report diagnostics
//! without writing any output.

use std::path::Path;

use anyhow::{Context, Result};

use modpart_core::{resolve, CapabilityIndex, Extension, Severity};
use modpart_registry::load_catalog;

use crate::commands::print_diagnostics;

/// Resolve all three extensions and summarize the findings.
pub fn run(catalog: &Path) -> Result<()> {
    let universe = load_catalog(catalog)
        .with_context(|| format!("loading module catalog {}", catalog.display()))?;
    let index = CapabilityIndex::build(&universe);

    let mut total_warnings = 0usize;
    for extension in Extension::ALL {
        let resolution = resolve(&extension.root_ids(), &universe, &index)
            .with_context(|| format!("resolving the {extension} closure"))?;
        print_diagnostics(&resolution.diagnostics);

        let warnings = resolution
            .diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
            .count();
        total_warnings += warnings;
        println!(
            "{extension}: {} modules, {} warnings",
            resolution.closure.len(),
            warnings
        );
    }

    if total_warnings == 0 {
        println!("Catalog is consistent.");
    }
    Ok(())
}
