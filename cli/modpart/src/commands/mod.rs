//! CLI subcommand implementations.

pub mod check;
pub mod closure;
pub mod compute;

use modpart_core::{Diagnostic, Severity};

/// Print resolution diagnostics to stderr in traversal order.
pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        match diagnostic.severity() {
            Severity::Warning => eprintln!("warning: {diagnostic}"),
            Severity::Info => eprintln!("info: {diagnostic}"),
        }
    }
}
