//! TOML module catalog parsing.
//!
//! A catalog is a single file with one `[[module]]` table per installed
//! module:
//!
//! ```toml
//! [[module]]
//! name = "org.netbeans.modules.editor"
//! provides = ["org.netbeans.api.editor.document"]
//! modules = ["org.openide.util/2", "org.netbeans.modules.lexer"]
//! needs = ["org.netbeans.api.javac"]
//! requires = []
//! recommends = ["org.netbeans.spi.editor.hints"]
//! platform = "17+"
//! ```
//!
//! Module references may carry a `/release` qualifier; the core strips it at
//! lookup time. Entries under `other` are preserved as unrecognized edges so
//! forward-compatible catalogs still resolve (the resolver diagnoses and
//! ignores them).

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use modpart_core::{Dependency, MemoryUniverse, Module};

use crate::error::{CatalogError, Result};

/// Raw catalog file structure.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    /// Module entries, in file order.
    #[serde(default)]
    module: Vec<RawModule>,
}

/// One `[[module]]` entry.
#[derive(Debug, Deserialize)]
struct RawModule {
    /// Code name base (required, unique).
    name: String,
    /// Provided capability names.
    #[serde(default)]
    provides: Vec<String>,
    /// Module reference targets (release qualifier allowed).
    #[serde(default)]
    modules: Vec<String>,
    /// Needed capability names.
    #[serde(default)]
    needs: Vec<String>,
    /// Required capability names (same semantics as `needs`).
    #[serde(default)]
    requires: Vec<String>,
    /// Recommended capability names (informational only).
    #[serde(default)]
    recommends: Vec<String>,
    /// Platform version constraint (ignored by resolution).
    #[serde(default)]
    platform: Option<String>,
    /// Unrecognized edges carried through for diagnosis.
    #[serde(default)]
    other: Vec<String>,
}

impl RawModule {
    fn into_module(self) -> Module {
        let mut dependencies = Vec::new();
        for target in self.modules {
            dependencies.push(Dependency::ModuleRef { target });
        }
        for capability in self.needs {
            dependencies.push(Dependency::Needs(capability));
        }
        for capability in self.requires {
            dependencies.push(Dependency::Requires(capability));
        }
        for capability in self.recommends {
            dependencies.push(Dependency::Recommends(capability));
        }
        if let Some(constraint) = self.platform {
            dependencies.push(Dependency::Platform(constraint));
        }
        for detail in self.other {
            dependencies.push(Dependency::Other(detail));
        }

        Module {
            id: self.name.as_str().into(),
            provides: self.provides,
            dependencies,
        }
    }
}

/// Parse a catalog from TOML text into a universe.
pub fn parse_catalog(text: &str) -> Result<MemoryUniverse> {
    let raw: RawCatalog = toml::from_str(text)?;

    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut universe = MemoryUniverse::new();
    for (index, entry) in raw.module.into_iter().enumerate() {
        if entry.name.is_empty() {
            return Err(CatalogError::EmptyModuleName { index });
        }
        if !seen.insert(entry.name.clone()) {
            return Err(CatalogError::DuplicateModule { name: entry.name });
        }
        universe.insert(entry.into_module());
    }
    Ok(universe)
}

/// Load a catalog file into a universe.
pub fn load_catalog(path: &Path) -> Result<MemoryUniverse> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&text)
}
