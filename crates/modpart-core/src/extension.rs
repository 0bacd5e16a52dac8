//! Product extensions and their root-module sets.
//!
//! Exactly three extensions exist: the `Lite` baseline plus the optional
//! `Maven` and `Gradle` build-tool integrations. Their root lists are
//! configuration constants owned by this crate, not discovered at runtime.

use std::fmt;
use std::str::FromStr;

use crate::module::ModuleId;

/// A named product variant with its own root-module set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// The baseline distribution (language server core).
    Lite,
    /// Maven project support.
    Maven,
    /// Gradle project support.
    Gradle,
}

impl Extension {
    /// All extensions, baseline first.
    pub const ALL: [Extension; 3] = [Extension::Lite, Extension::Maven, Extension::Gradle];

    /// Display name, also used for the closure listing file.
    pub fn name(&self) -> &'static str {
        match self {
            Extension::Lite => "Lite",
            Extension::Maven => "Maven",
            Extension::Gradle => "Gradle",
        }
    }

    /// The configured root module code name bases for this extension.
    pub fn roots(&self) -> &'static [&'static str] {
        match self {
            Extension::Lite => LITE_ROOTS,
            Extension::Maven => MAVEN_ROOTS,
            Extension::Gradle => GRADLE_ROOTS,
        }
    }

    /// The root set as owned identifiers, in declaration order.
    pub fn root_ids(&self) -> Vec<ModuleId> {
        self.roots().iter().map(|id| ModuleId::new(*id)).collect()
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Extension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lite" => Ok(Extension::Lite),
            "maven" => Ok(Extension::Maven),
            "gradle" => Ok(Extension::Gradle),
            other => Err(format!(
                "unknown extension '{other}' (expected lite, maven, or gradle)"
            )),
        }
    }
}

const LITE_ROOTS: &[&str] = &[
    // The basic server:
    "org.netbeans.modules.java.lsp.server", // the Java LSP server
    // OSGi module support:
    "org.netbeans.modules.netbinox",
    // Dependencies of the editor integration:
    "org.netbeans.modules.project.dependency",
    "org.netbeans.modules.updatecenters",
    "org.netbeans.swing.laf.flatlaf",
    "org.netbeans.core.execution", // fulfils the default ExecutionEngine lookup
    // Additional dependencies needed to make things work:
    "org.netbeans.modules.autoupdate.cli", // provides the --modules option
    "org.netbeans.modules.editor",         // DocumentFactory
    "org.netbeans.modules.editor.mimelookup.impl", // MimeLookup from layers
    "org.netbeans.modules.lexer.nbbridge", // so that lexers work
    "org.netbeans.modules.java.j2seplatform", // so that JRT FS works
    "org.netbeans.libs.nbjavacapi",
    // Autocompletion:
    "org.netbeans.modules.editor.autosave",
    "org.netbeans.modules.editor.bookmarks",
    "org.netbeans.modules.editor.macros",
    "org.netbeans.modules.autoupdate.ui",
    // Test runners:
    "org.netbeans.modules.junit.ui",
    "org.netbeans.modules.testng.ui",
    // Debugging:
    "org.netbeans.modules.masterfs.nio2",
    "org.netbeans.modules.masterfs.ui",
];

const MAVEN_ROOTS: &[&str] = &[
    "org.netbeans.modules.maven.hints",
    "org.netbeans.modules.maven.model",
    "org.netbeans.modules.maven.indexer.ui",
    "org.netbeans.modules.maven.junit.ui",
    "org.netbeans.modules.maven.junit",
    "org.netbeans.modules.maven.apisupport",
    "org.netbeans.modules.maven.profiler",
    "org.netbeans.modules.maven.embedder",
    "org.netbeans.modules.maven.indexer",
    "org.netbeans.modules.apisupport.installer.maven",
    "org.netbeans.api.maven",
    "org.netbeans.modules.maven.persistence",
    "org.netbeans.modules.maven",
    "org.netbeans.modules.maven.htmlui",
];

const GRADLE_ROOTS: &[&str] = &[
    "org.netbeans.modules.gradle.java",
    "org.netbeans.modules.gradle.test",
    "org.netbeans.modules.gradle.editor",
    "org.netbeans.modules.gradle.dists",
    "org.netbeans.modules.gradle.persistence",
];
