//! Plain-text listing output.
//!
//! One file per computed set, one identifier per line (the disabled set is
//! additionally comma-joined into the configuration file). File names match
//! the original tooling so downstream packaging keeps working. Output
//! targets are independent: a failed write is recorded and the remaining
//! targets are still attempted.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use modpart_core::{ModuleId, PartitionResult};

use crate::error::{ReportError, Result};
use crate::properties::PropertiesFile;

/// The configuration key rewritten with the comma-joined disabled set.
pub const DISABLED_MODULES_KEY: &str = "disabled.modules";

/// What happened while writing the listing files.
#[derive(Debug, Default)]
pub struct EmitReport {
    /// Files written successfully.
    pub written: Vec<PathBuf>,
    /// Targets that failed, with the I/O error.
    pub failures: Vec<(PathBuf, std::io::Error)>,
}

impl EmitReport {
    /// Whether every target was written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Join identifiers with newlines (sorted, set semantics).
pub fn newline_joined(ids: &BTreeSet<ModuleId>) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join identifiers with commas (sorted, set semantics).
pub fn comma_joined(ids: &BTreeSet<ModuleId>) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Write every listing file into `out_dir` (created if absent).
///
/// `closures` are the full per-extension closures in (name, set) form, kept
/// for audit output beside the partitioned sets.
pub fn emit_listings(
    out_dir: &Path,
    closures: &[(&str, &BTreeSet<ModuleId>)],
    partition: &PartitionResult,
) -> Result<EmitReport> {
    std::fs::create_dir_all(out_dir).map_err(|source| ReportError::io(out_dir, source))?;

    let mut report = EmitReport::default();
    let mut write = |file_name: String, content: String| {
        let path = out_dir.join(file_name);
        match std::fs::write(&path, content) {
            Ok(()) => report.written.push(path),
            Err(err) => report.failures.push((path, err)),
        }
    };

    for (name, closure) in closures {
        write(format!("{name}.txt"), newline_joined(closure));
    }
    write(
        "modulesToEnableMaven.txt".to_string(),
        newline_joined(&partition.enabled_maven),
    );
    write(
        "modulesToEnableGradle.txt".to_string(),
        newline_joined(&partition.enabled_gradle),
    );
    write(
        "modulesToEnableLite.txt".to_string(),
        newline_joined(&partition.final_lite),
    );
    write(
        "modulesToBeDisabledLite.txt".to_string(),
        comma_joined(&partition.disabled),
    );

    Ok(report)
}

/// Rewrite the `disabled.modules` key of the target configuration file,
/// preserving every other key and comment (the file is created if absent).
pub fn update_disabled_modules(target: &Path, disabled: &BTreeSet<ModuleId>) -> Result<()> {
    let mut props = PropertiesFile::load(target)?;
    props.set(DISABLED_MODULES_KEY, &comma_joined(disabled));
    props.store(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<ModuleId> {
        names.iter().map(|n| ModuleId::new(*n)).collect()
    }

    fn sample_partition() -> PartitionResult {
        PartitionResult {
            final_lite: set(&["a", "b"]),
            enabled_maven: set(&["m"]),
            enabled_gradle: set(&["g"]),
            disabled: set(&["g", "m", "z"]),
        }
    }

    #[test]
    fn writes_all_listing_files() {
        let dir = tempfile::tempdir().unwrap();
        let lite = set(&["a", "b"]);
        let maven = set(&["a", "m"]);
        let gradle = set(&["a", "g"]);
        let closures = [
            ("Lite", &lite),
            ("Maven", &maven),
            ("Gradle", &gradle),
        ];

        let report = emit_listings(dir.path(), &closures, &sample_partition()).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.written.len(), 7);

        let lite_txt = std::fs::read_to_string(dir.path().join("Lite.txt")).unwrap();
        assert_eq!(lite_txt, "a\nb");
        let maven_enable =
            std::fs::read_to_string(dir.path().join("modulesToEnableMaven.txt")).unwrap();
        assert_eq!(maven_enable, "m");
        let disabled =
            std::fs::read_to_string(dir.path().join("modulesToBeDisabledLite.txt")).unwrap();
        assert_eq!(disabled, "g,m,z");
    }

    #[test]
    fn creates_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("out");
        let closures: [(&str, &BTreeSet<ModuleId>); 0] = [];
        let report = emit_listings(&nested, &closures, &sample_partition()).unwrap();
        assert!(report.is_complete());
        assert!(nested.join("modulesToEnableLite.txt").is_file());
    }

    #[test]
    fn failed_target_does_not_stop_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        // Occupy one target name with a directory so the write fails.
        std::fs::create_dir(dir.path().join("modulesToEnableMaven.txt")).unwrap();

        let closures: [(&str, &BTreeSet<ModuleId>); 0] = [];
        let report = emit_listings(dir.path(), &closures, &sample_partition()).unwrap();
        assert_eq!(report.failures.len(), 1);
        // The remaining targets were still written.
        assert!(dir.path().join("modulesToEnableGradle.txt").is_file());
        assert!(dir.path().join("modulesToBeDisabledLite.txt").is_file());
    }

    #[test]
    fn update_creates_and_merges_properties() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nbcode.properties");

        update_disabled_modules(&target, &set(&["x", "y"])).unwrap();
        let first = std::fs::read_to_string(&target).unwrap();
        assert_eq!(first, "disabled.modules=x,y\n");

        std::fs::write(&target, "# comment\nkeep=1\ndisabled.modules=x,y\n").unwrap();
        update_disabled_modules(&target, &set(&["z"])).unwrap();
        let second = std::fs::read_to_string(&target).unwrap();
        assert_eq!(second, "# comment\nkeep=1\ndisabled.modules=z\n");
    }

    #[test]
    fn empty_set_joins_to_empty_string() {
        assert_eq!(newline_joined(&BTreeSet::new()), "");
        assert_eq!(comma_joined(&BTreeSet::new()), "");
    }
}
