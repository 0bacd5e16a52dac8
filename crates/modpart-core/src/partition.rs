//! Set algebra over the three extension closures.
//!
//! Modules needed by both optional extensions move into the shared baseline;
//! the disabled set is the universe minus that folded baseline. The disabled
//! set deliberately does not subtract the Maven/Gradle-only modules: it
//! models the minimal baseline-only runtime, and enabling an extension is a
//! separate additive step outside this computation.

use std::collections::BTreeSet;

use crate::module::ModuleId;
use crate::universe::ModuleUniverse;

/// The final enabled/disabled partition, immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionResult {
    /// The baseline closure after folding in the Maven ∩ Gradle overlap.
    pub final_lite: BTreeSet<ModuleId>,
    /// Maven-only modules (Maven closure minus the folded baseline).
    pub enabled_maven: BTreeSet<ModuleId>,
    /// Gradle-only modules (Gradle closure minus the folded baseline).
    pub enabled_gradle: BTreeSet<ModuleId>,
    /// Universe minus the folded baseline.
    pub disabled: BTreeSet<ModuleId>,
}

/// Partition the universe given the three per-extension closures.
///
/// Pure function: no diagnostics, no I/O.
pub fn partition(
    lite: &BTreeSet<ModuleId>,
    maven: &BTreeSet<ModuleId>,
    gradle: &BTreeSet<ModuleId>,
    universe: &dyn ModuleUniverse,
) -> PartitionResult {
    let common: BTreeSet<ModuleId> = maven.intersection(gradle).cloned().collect();
    let final_lite: BTreeSet<ModuleId> = lite.union(&common).cloned().collect();
    let enabled_maven: BTreeSet<ModuleId> = maven.difference(&final_lite).cloned().collect();
    let enabled_gradle: BTreeSet<ModuleId> = gradle.difference(&final_lite).cloned().collect();
    let disabled: BTreeSet<ModuleId> = universe
        .ids()
        .difference(&final_lite)
        .cloned()
        .collect();

    PartitionResult {
        final_lite,
        enabled_maven,
        enabled_gradle,
        disabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilityIndex;
    use crate::module::{Dependency, Module};
    use crate::resolve::resolve;
    use crate::universe::MemoryUniverse;

    fn set(names: &[&str]) -> BTreeSet<ModuleId> {
        names.iter().map(|n| ModuleId::new(*n)).collect()
    }

    #[test]
    fn shared_optional_modules_fold_into_baseline() {
        // universe = {A, B, C, D}; A → B; C provides cap1; D needs cap1.
        // Roots: Lite=[A], Maven=[D], Gradle=[D].
        let universe = MemoryUniverse::from_modules([
            Module::new("A").depending_on(Dependency::ModuleRef {
                target: "B".to_string(),
            }),
            Module::new("B"),
            Module::new("C").providing("cap1"),
            Module::new("D").depending_on(Dependency::Needs("cap1".to_string())),
        ]);
        let index = CapabilityIndex::build(&universe);
        let lite = resolve(&[ModuleId::new("A")], &universe, &index).unwrap();
        let maven = resolve(&[ModuleId::new("D")], &universe, &index).unwrap();
        let gradle = resolve(&[ModuleId::new("D")], &universe, &index).unwrap();

        assert_eq!(lite.closure, set(&["A", "B"]));
        assert_eq!(maven.closure, set(&["C", "D"]));
        assert_eq!(gradle.closure, set(&["C", "D"]));

        let result = partition(&lite.closure, &maven.closure, &gradle.closure, &universe);
        assert_eq!(result.final_lite, set(&["A", "B", "C", "D"]));
        assert!(result.enabled_maven.is_empty());
        assert!(result.enabled_gradle.is_empty());
        assert!(result.disabled.is_empty());
    }

    #[test]
    fn extension_only_modules_stay_out_of_baseline() {
        let universe = MemoryUniverse::from_modules([
            Module::new("base"),
            Module::new("m-only"),
            Module::new("g-only"),
            Module::new("both"),
        ]);
        let result = partition(
            &set(&["base"]),
            &set(&["m-only", "both"]),
            &set(&["g-only", "both"]),
            &universe,
        );
        assert_eq!(result.final_lite, set(&["base", "both"]));
        assert_eq!(result.enabled_maven, set(&["m-only"]));
        assert_eq!(result.enabled_gradle, set(&["g-only"]));
        // Extension-only modules are still disabled relative to the
        // baseline-only runtime.
        assert_eq!(result.disabled, set(&["g-only", "m-only"]));
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let universe = MemoryUniverse::from_modules([
            Module::new("a"),
            Module::new("b"),
            Module::new("c"),
            Module::new("d"),
            Module::new("e"),
        ]);
        let result = partition(
            &set(&["a"]),
            &set(&["b", "c"]),
            &set(&["c", "d"]),
            &universe,
        );

        assert!(result.final_lite.is_disjoint(&result.enabled_maven));
        assert!(result.final_lite.is_disjoint(&result.enabled_gradle));
        assert!(result.enabled_maven.is_disjoint(&result.enabled_gradle));

        // final_lite ∪ disabled covers the whole universe.
        let covered: BTreeSet<ModuleId> = result
            .final_lite
            .union(&result.disabled)
            .cloned()
            .collect();
        assert_eq!(covered, universe.ids());

        // Enabled extension sets sit inside the disabled (baseline-relative)
        // remainder.
        assert!(result.enabled_maven.is_subset(&result.disabled));
        assert!(result.enabled_gradle.is_subset(&result.disabled));
    }

    #[test]
    fn empty_closures() {
        let universe = MemoryUniverse::from_modules([Module::new("a"), Module::new("b")]);
        let empty = BTreeSet::new();
        let result = partition(&empty, &empty, &empty, &universe);
        assert!(result.final_lite.is_empty());
        assert_eq!(result.disabled, set(&["a", "b"]));
    }
}
