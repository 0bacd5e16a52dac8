//! Module identity and dependency edges.
//!
//! A module is identified by its code name base, an opaque dotted string
//! unique within the universe. A module reference may carry a release
//! qualifier after `/` (for example `org.openide.util/2`); the qualifier is
//! stripped before lookup and otherwise ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between a code name base and its release qualifier.
pub const RELEASE_SEPARATOR: char = '/';

/// A module identifier (code name base).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Create an identifier from a code name base.
    pub fn new(id: impl Into<String>) -> Self {
        ModuleId(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create an identifier from a module reference target, stripping any
    /// release qualifier (`name/2` → `name`).
    pub fn from_ref_target(target: &str) -> Self {
        ModuleId(strip_release_qualifier(target).to_string())
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        ModuleId::new(id)
    }
}

/// Strip a release qualifier suffix from a module reference target.
pub fn strip_release_qualifier(target: &str) -> &str {
    match target.find(RELEASE_SEPARATOR) {
        Some(idx) => &target[..idx],
        None => target,
    }
}

/// A typed dependency edge declared by a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dependency {
    /// Hard reference to another module by code name base (release
    /// qualifier allowed in `target`).
    ModuleRef { target: String },
    /// Hard requirement satisfiable by any provider of the capability.
    Needs(String),
    /// Identical semantics to [`Dependency::Needs`].
    Requires(String),
    /// Soft, informational only; never affects closure membership.
    Recommends(String),
    /// Runtime platform constraint; never a module edge.
    Platform(String),
    /// Any other edge kind; diagnosed and ignored.
    Other(String),
}

/// An installed module as seen through the registry view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Code name base.
    pub id: ModuleId,
    /// Capability names this module provides.
    pub provides: Vec<String>,
    /// Dependency edges in declaration order.
    pub dependencies: Vec<Dependency>,
}

impl Module {
    /// Create a module with no capabilities and no dependencies.
    pub fn new(id: impl Into<ModuleId>) -> Self {
        Module {
            id: id.into(),
            provides: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Add a provided capability (builder style, used heavily in tests).
    pub fn providing(mut self, capability: impl Into<String>) -> Self {
        self.provides.push(capability.into());
        self
    }

    /// Add a dependency edge (builder style).
    pub fn depending_on(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_qualifier() {
        assert_eq!(strip_release_qualifier("org.openide.util/2"), "org.openide.util");
        assert_eq!(strip_release_qualifier("org.openide.util"), "org.openide.util");
    }

    #[test]
    fn strip_qualifier_keeps_first_segment_only() {
        assert_eq!(strip_release_qualifier("a/1/2"), "a");
    }

    #[test]
    fn ref_target_to_id() {
        let id = ModuleId::from_ref_target("org.netbeans.modules.editor/4");
        assert_eq!(id.as_str(), "org.netbeans.modules.editor");
    }

    #[test]
    fn builder_preserves_declaration_order() {
        let m = Module::new("a")
            .depending_on(Dependency::ModuleRef {
                target: "b".to_string(),
            })
            .depending_on(Dependency::Needs("cap".to_string()));
        assert_eq!(m.dependencies.len(), 2);
        assert!(matches!(m.dependencies[0], Dependency::ModuleRef { .. }));
        assert!(matches!(m.dependencies[1], Dependency::Needs(_)));
    }
}
