//! Non-fatal resolution diagnostics.
//!
//! Module metadata is assumed occasionally inconsistent, so the resolver
//! degrades rather than aborts: every unmet or ambiguous requirement becomes
//! a `Diagnostic` collected alongside the closure. Callers (the CLI) decide
//! how to surface them; this crate never writes to stderr itself.

use std::fmt;

use crate::module::ModuleId;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational, expected in normal runs.
    Info,
    /// The closure is smaller than the metadata intended.
    Warning,
}

/// A single non-fatal finding from closure resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A module reference target does not exist in the universe.
    UnresolvedRef { requirer: ModuleId, target: String },
    /// A required capability has no provider.
    NoProvider {
        requirer: ModuleId,
        capability: String,
    },
    /// A required capability has several providers; none is auto-selected.
    AmbiguousProvider {
        requirer: ModuleId,
        capability: String,
        providers: Vec<ModuleId>,
    },
    /// A recommended capability, listed with its current providers.
    Recommendation {
        requirer: ModuleId,
        capability: String,
        providers: Vec<ModuleId>,
    },
    /// A dependency edge of an unrecognized kind.
    UnknownDependency { requirer: ModuleId, detail: String },
}

impl Diagnostic {
    /// Severity of this finding.
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::Recommendation { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

fn join_ids(ids: &[ModuleId]) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedRef { requirer, target } => {
                write!(f, "module: {requirer}, cannot find module: {target}")
            }
            Diagnostic::NoProvider {
                requirer,
                capability,
            } => write!(
                f,
                "module: {requirer}, requires capability: '{capability}', \
                 but there are no modules providing this capability"
            ),
            Diagnostic::AmbiguousProvider {
                requirer,
                capability,
                providers,
            } => write!(
                f,
                "module: {requirer}, requires capability: '{capability}', \
                 modules that provide that capability are: [{}]",
                join_ids(providers)
            ),
            Diagnostic::Recommendation {
                requirer,
                capability,
                providers,
            } => write!(
                f,
                "module: {requirer}, recommends capability: '{capability}', \
                 modules that provide that capability are: [{}]",
                join_ids(providers)
            ),
            Diagnostic::UnknownDependency { requirer, detail } => {
                write!(f, "module: {requirer}, unhandled dependency: {detail}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_is_info_rest_are_warnings() {
        let info = Diagnostic::Recommendation {
            requirer: ModuleId::new("a"),
            capability: "cap".to_string(),
            providers: vec![],
        };
        let warn = Diagnostic::NoProvider {
            requirer: ModuleId::new("a"),
            capability: "cap".to_string(),
        };
        assert_eq!(info.severity(), Severity::Info);
        assert_eq!(warn.severity(), Severity::Warning);
    }

    #[test]
    fn ambiguous_message_names_all_candidates() {
        let diag = Diagnostic::AmbiguousProvider {
            requirer: ModuleId::new("m"),
            capability: "cap".to_string(),
            providers: vec![ModuleId::new("p1"), ModuleId::new("p2")],
        };
        let text = diag.to_string();
        assert!(text.contains("'cap'"));
        assert!(text.contains("p1, p2"));
    }

    #[test]
    fn unresolved_ref_message() {
        let diag = Diagnostic::UnresolvedRef {
            requirer: ModuleId::new("m"),
            target: "gone".to_string(),
        };
        assert!(diag.to_string().contains("cannot find module: gone"));
    }
}
