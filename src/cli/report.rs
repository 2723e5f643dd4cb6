//! Output formatting and printing utilities.
//!
//! Separate from core logic to allow glot-migrate to be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::Extraction;
use crate::migrate::MigrationReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Warning mark for consistent output formatting.
pub const WARNING_MARK: &str = "\u{26a0}"; // ⚠

/// Print a migration summary to stdout.
pub fn print_migration(report: &MigrationReport) {
    print_migration_to(report, &mut io::stdout().lock());
}

/// Print a migration summary to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_migration_to<W: Write>(report: &MigrationReport, writer: &mut W) {
    let summary = report.summary();
    let line = if report.is_noop() {
        summary.yellow().to_string()
    } else if report.catalog_recovery.is_some() {
        format!("{} {}", WARNING_MARK.yellow(), summary.yellow())
    } else {
        format!("{} {}", SUCCESS_MARK.green(), summary.green())
    };
    let _ = writeln!(writer, "{}", line);

    if report.parse_diagnostics > 0 {
        let _ = writeln!(
            writer,
            "  {} syntax error(s) were recovered while parsing {}",
            report.parse_diagnostics,
            report.source_path.display()
        );
    }
}

/// Print extracted entries as pretty JSON to stdout.
pub fn print_extraction(extraction: &Extraction) -> Result<()> {
    print_extraction_to(extraction, &mut io::stdout().lock())
}

/// Print extracted entries as pretty JSON to a custom writer.
pub fn print_extraction_to<W: Write>(extraction: &Extraction, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(&extraction.entries).context("Failed to serialize JSON")?;
    writeln!(writer, "{}", json).context("Failed to write output")?;
    Ok(())
}
