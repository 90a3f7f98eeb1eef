//! Text output formatter for human-readable display

use crate::domain::UpdateReport;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn package(&self, name: &str) -> String {
        if self.color {
            name.green().to_string()
        } else {
            name.to_string()
        }
    }

    fn write_group(
        &self,
        writer: &mut dyn Write,
        title: &str,
        names: &[String],
    ) -> std::io::Result<()> {
        if names.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{} ({}):", self.heading(title), names.len())?;
        for name in names {
            writeln!(writer, "  {}", self.package(name))?;
        }
        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        if report.is_empty() {
            writeln!(writer, "No dependencies declared; lock file synced.")?;
            return Ok(());
        }

        let deps = &report.dependencies;
        self.write_group(writer, "dependencies", &deps.main)?;
        self.write_group(writer, "dev", &deps.dev)?;
        for (group, names) in &deps.optional {
            self.write_group(writer, group, names)?;
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(writer)?;
            writeln!(writer, "Manifest: {}", report.manifest_path.display())?;
            writeln!(writer, "Removed declarations: {}", report.removed_entries)?;
            writeln!(
                writer,
                "Lock file: {}",
                if report.lock_removed {
                    "regenerated"
                } else {
                    "created"
                }
            )?;
        }

        writeln!(writer)?;
        let mut summary = format!("Updated {} dependencies", report.total_updated());
        if !report.exactified.is_empty() {
            summary.push_str(" (exact versions saved)");
        }
        if self.color {
            writeln!(writer, "{}", summary.green().bold())?;
        } else {
            writeln!(writer, "{}", summary)?;
        }

        Ok(())
    }
}
