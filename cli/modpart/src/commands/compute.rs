//! `modpart compute` — the full pipeline: catalog → capability index →
//! per-extension closures → partition → listings + properties rewrite.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use modpart_core::{partition, resolve, CapabilityIndex, Extension, ModuleId, ModuleUniverse};
use modpart_registry::load_catalog;
use modpart_report::{emit_listings, update_disabled_modules};

use crate::commands::print_diagnostics;

/// Run the computation and write every output.
///
/// Without a target properties path the computation is skipped entirely and
/// the process ends normally; this mirrors the trigger contract of the
/// original tooling.
pub fn run(catalog: &Path, target_properties: Option<&Path>, out_dir: &Path) -> Result<()> {
    let Some(target) = target_properties else {
        println!("No --target-properties given; skipping computation.");
        return Ok(());
    };

    let universe = load_catalog(catalog)
        .with_context(|| format!("loading module catalog {}", catalog.display()))?;
    let index = CapabilityIndex::build(&universe);

    let mut closures: Vec<(Extension, BTreeSet<ModuleId>)> = Vec::new();
    for extension in Extension::ALL {
        let resolution = resolve(&extension.root_ids(), &universe, &index)
            .with_context(|| format!("resolving the {extension} closure"))?;
        print_diagnostics(&resolution.diagnostics);
        closures.push((extension, resolution.closure));
    }

    let result = partition(
        &closures[0].1,
        &closures[1].1,
        &closures[2].1,
        &universe,
    );

    let named: Vec<(&str, &BTreeSet<ModuleId>)> = closures
        .iter()
        .map(|(extension, closure)| (extension.name(), closure))
        .collect();
    let report = emit_listings(out_dir, &named, &result)
        .with_context(|| format!("writing listings to {}", out_dir.display()))?;
    for (path, err) in &report.failures {
        eprintln!("warning: cannot write {}: {err}", path.display());
    }

    update_disabled_modules(target, &result.disabled)
        .with_context(|| format!("updating {}", target.display()))?;

    println!(
        "Wrote {} listings to {} ({} of {} modules disabled)",
        report.written.len(),
        out_dir.display(),
        result.disabled.len(),
        universe.len()
    );
    Ok(())
}
