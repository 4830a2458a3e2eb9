// crates/cli/src/presentation.rs
use std::io::Write;

use concentric_core::stats::SortStats;
use serde::Serialize;

use crate::error::Result;

/// What happened to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// File path, or `-` for stdin.
    pub input: String,
    pub changed: bool,
    pub written: bool,
    /// `None` when the range covered a single line and nothing ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SortStats>,
    /// Sorted text, omitted once it has been written back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Print sorted text as-is.
///
/// # Errors
/// Propagates write failures.
pub fn print_text<W: Write>(out: &mut W, reports: &[Report]) -> Result<()> {
    for report in reports {
        if let Some(text) = &report.text {
            out.write_all(text.as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Print all reports as one pretty JSON array.
///
/// # Errors
/// Propagates serialization and write failures.
pub fn print_json<W: Write>(out: &mut W, reports: &[Report]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// One-line summary for `--write` runs, logged at info level.
#[must_use]
pub fn summary_line(report: &Report) -> String {
    match (&report.stats, report.changed) {
        (None, _) => format!("{}: nothing to sort", report.input),
        (Some(_), false) => format!("{}: already sorted", report.input),
        (Some(stats), true) if stats.removed_any() => format!(
            "{}: sorted {} lines ({} blank, {} duplicate removed)",
            report.input, stats.input_lines, stats.blank_removed, stats.duplicates_removed
        ),
        (Some(stats), true) => format!("{}: sorted {} lines", report.input, stats.input_lines),
    }
}
