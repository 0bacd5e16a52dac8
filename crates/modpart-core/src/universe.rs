//! Registry view trait and in-memory implementation.
//!
//! The `ModuleUniverse` trait abstracts the host module registry (the
//! enumeration of all installed modules) so the resolver and partitioner can
//! be driven by any source: a loaded catalog file in production, a few
//! hand-built modules in tests.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::module::{Module, ModuleId};

/// Read-only view of every installed module.
pub trait ModuleUniverse {
    /// Look up a module by code name base.
    fn get(&self, id: &ModuleId) -> Option<&Module>;

    /// Iterate over all modules, in stable (sorted) order.
    fn modules(&self) -> Box<dyn Iterator<Item = &Module> + '_>;

    /// Number of modules in the universe.
    fn len(&self) -> usize;

    /// Whether the universe is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All module identifiers in the universe.
    fn ids(&self) -> BTreeSet<ModuleId> {
        self.modules().map(|m| m.id.clone()).collect()
    }
}

/// An in-memory universe backed by a sorted map.
#[derive(Debug, Clone, Default)]
pub struct MemoryUniverse {
    modules: BTreeMap<ModuleId, Module>,
}

impl MemoryUniverse {
    /// Create an empty universe.
    pub fn new() -> Self {
        MemoryUniverse::default()
    }

    /// Build a universe from a list of modules.
    ///
    /// Later duplicates replace earlier ones; catalog loading rejects
    /// duplicates before this point.
    pub fn from_modules(modules: impl IntoIterator<Item = Module>) -> Self {
        let mut universe = MemoryUniverse::new();
        for module in modules {
            universe.insert(module);
        }
        universe
    }

    /// Insert a module, returning the previous module with the same id.
    pub fn insert(&mut self, module: Module) -> Option<Module> {
        self.modules.insert(module.id.clone(), module)
    }

    /// Whether a module with the given id is present.
    pub fn contains(&self, id: &ModuleId) -> bool {
        self.modules.contains_key(id)
    }
}

impl ModuleUniverse for MemoryUniverse {
    fn get(&self, id: &ModuleId) -> Option<&Module> {
        self.modules.get(id)
    }

    fn modules(&self) -> Box<dyn Iterator<Item = &Module> + '_> {
        Box::new(self.modules.values())
    }

    fn len(&self) -> usize {
        self.modules.len()
    }
}
