//! `modpart closure` — resolve and print one extension's closure.

use std::path::Path;

use anyhow::{bail, Context, Result};

use modpart_core::{resolve, CapabilityIndex, Extension};
use modpart_registry::load_catalog;

use crate::commands::print_diagnostics;

/// Resolve one extension and print its closure to stdout.
pub fn run(extension: Extension, catalog: &Path, format: Option<&str>) -> Result<()> {
    let universe = load_catalog(catalog)
        .with_context(|| format!("loading module catalog {}", catalog.display()))?;
    let index = CapabilityIndex::build(&universe);

    let resolution = resolve(&extension.root_ids(), &universe, &index)
        .with_context(|| format!("resolving the {extension} closure"))?;
    print_diagnostics(&resolution.diagnostics);

    match format.unwrap_or("text") {
        "text" => {
            for id in &resolution.closure {
                println!("{id}");
            }
        }
        "json" => {
            let ids: Vec<_> = resolution.closure.iter().collect();
            println!("{}", serde_json::to_string_pretty(&ids)?);
        }
        other => bail!("unknown format '{other}' (expected text or json)"),
    }
    Ok(())
}
