//! JSON output formatter for machine processing

use crate::domain::UpdateReport;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of a successful run
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Path to the manifest file
    manifest: String,
    /// Whether an existing lock file was removed
    lock_removed: bool,
    /// Number of excised declarations
    removed: usize,
    /// Re-added main dependencies
    dependencies: &'a [String],
    /// Re-added dev dependencies
    dev: &'a [String],
    /// Re-added optional dependencies by group
    #[serde(skip_serializing_if = "no_groups")]
    optional: &'a BTreeMap<String, Vec<String>>,
    /// Names pinned to exact versions
    exact: &'a [String],
}

fn no_groups(groups: &&BTreeMap<String, Vec<String>>) -> bool {
    groups.is_empty()
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            manifest: report.manifest_path.display().to_string(),
            lock_removed: report.lock_removed,
            removed: report.removed_entries,
            dependencies: &report.dependencies.main,
            dev: &report.dependencies.dev,
            optional: &report.dependencies.optional,
            exact: &report.exactified,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
