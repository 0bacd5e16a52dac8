//! Capability provision index.
//!
//! Maps a capability name to the modules that provide it. Built by scanning
//! the universe exactly once at the start of a run and immutable afterwards;
//! never cached across runs.

use std::collections::HashMap;

use crate::module::ModuleId;
use crate::universe::ModuleUniverse;

/// Capability name → providing modules.
#[derive(Debug, Clone, Default)]
pub struct CapabilityIndex {
    providers: HashMap<String, Vec<ModuleId>>,
}

impl CapabilityIndex {
    /// Build the index by scanning every module in the universe.
    pub fn build(universe: &dyn ModuleUniverse) -> Self {
        let mut providers: HashMap<String, Vec<ModuleId>> = HashMap::new();
        for module in universe.modules() {
            for capability in &module.provides {
                providers
                    .entry(capability.clone())
                    .or_default()
                    .push(module.id.clone());
            }
        }
        // Sorted provider lists keep diagnostics deterministic.
        for ids in providers.values_mut() {
            ids.sort();
            ids.dedup();
        }
        CapabilityIndex { providers }
    }

    /// The modules providing a capability, sorted by id.
    ///
    /// Returns an empty slice (not an error) for an unknown capability.
    pub fn providers_of(&self, capability: &str) -> &[ModuleId] {
        self.providers
            .get(capability)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct capabilities with at least one provider.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no module provides any capability.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
