//! Work-list closure resolution.
//!
//! Computes the transitive set of modules required by a root set, following
//! module references and single-provider capability requirements. Traversal
//! order is insertion order (FIFO), but the resulting closure is a set and
//! does not depend on it; only diagnostic ordering does.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::capability::CapabilityIndex;
use crate::diagnostic::Diagnostic;
use crate::error::{ResolveError, Result};
use crate::module::{Dependency, ModuleId};
use crate::universe::ModuleUniverse;

/// The outcome of one closure resolution.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Every module reachable from the roots.
    pub closure: BTreeSet<ModuleId>,
    /// Non-fatal findings, in traversal order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve the transitive closure of the given roots.
///
/// Fails with [`ResolveError::RootsNotFound`] listing every unresolvable
/// root before any traversal happens. All other inconsistencies (dangling
/// references, unsatisfied or ambiguous capabilities) degrade the closure
/// and are reported as diagnostics.
pub fn resolve(
    roots: &[ModuleId],
    universe: &dyn ModuleUniverse,
    index: &CapabilityIndex,
) -> Result<Resolution> {
    let missing: Vec<ModuleId> = roots
        .iter()
        .filter(|id| universe.get(id).is_none())
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(ResolveError::RootsNotFound { missing });
    }

    let mut todo: VecDeque<ModuleId> = roots.iter().cloned().collect();
    let mut closure: BTreeSet<ModuleId> = BTreeSet::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    // Each capability requirement is satisfied at most once per resolution:
    // once a provider is enqueued, re-processing the same capability name for
    // another requiring module is redundant. Guards are scoped to this call.
    let mut seen_needs: HashSet<String> = HashSet::new();
    let mut seen_requires: HashSet<String> = HashSet::new();
    let mut seen_recommends: HashSet<String> = HashSet::new();

    while let Some(current) = todo.pop_front() {
        if !closure.insert(current.clone()) {
            continue;
        }
        // Everything enqueued was looked up first, so this always resolves.
        let Some(module) = universe.get(&current) else {
            continue;
        };

        for dependency in &module.dependencies {
            match dependency {
                Dependency::ModuleRef { target } => {
                    let target_id = ModuleId::from_ref_target(target);
                    if universe.get(&target_id).is_some() {
                        todo.push_back(target_id);
                    } else {
                        diagnostics.push(Diagnostic::UnresolvedRef {
                            requirer: current.clone(),
                            target: target_id.as_str().to_string(),
                        });
                    }
                }
                Dependency::Needs(capability) => {
                    if seen_needs.insert(capability.clone()) {
                        satisfy_capability(
                            &current,
                            capability,
                            index,
                            &mut todo,
                            &mut diagnostics,
                        );
                    }
                }
                Dependency::Requires(capability) => {
                    if seen_requires.insert(capability.clone()) {
                        satisfy_capability(
                            &current,
                            capability,
                            index,
                            &mut todo,
                            &mut diagnostics,
                        );
                    }
                }
                Dependency::Recommends(capability) => {
                    if seen_recommends.insert(capability.clone()) {
                        diagnostics.push(Diagnostic::Recommendation {
                            requirer: current.clone(),
                            capability: capability.clone(),
                            providers: index.providers_of(capability).to_vec(),
                        });
                    }
                }
                Dependency::Platform(_) => {}
                Dependency::Other(detail) => {
                    diagnostics.push(Diagnostic::UnknownDependency {
                        requirer: current.clone(),
                        detail: detail.clone(),
                    });
                }
            }
        }
    }

    Ok(Resolution {
        closure,
        diagnostics,
    })
}

/// Handle a hard capability requirement: enqueue the sole provider, or
/// diagnose zero/ambiguous provision. Ambiguity is never silently resolved.
fn satisfy_capability(
    requirer: &ModuleId,
    capability: &str,
    index: &CapabilityIndex,
    todo: &mut VecDeque<ModuleId>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let providers = index.providers_of(capability);
    match providers {
        [] => diagnostics.push(Diagnostic::NoProvider {
            requirer: requirer.clone(),
            capability: capability.to_string(),
        }),
        [sole] => todo.push_back(sole.clone()),
        _ => diagnostics.push(Diagnostic::AmbiguousProvider {
            requirer: requirer.clone(),
            capability: capability.to_string(),
            providers: providers.to_vec(),
        }),
    }
}
