//! Rendering and writing of the aggregated report.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::walker::AggregateReport;

/// Render the report document.
///
/// Files with no entries are omitted. Each remaining file gets a `####`
/// heading followed by one line per entry, with blank lines between them:
///
/// ```text
///
/// #### chapter-one
///
///   AUTHOR : alice  -  COMMENT: fix this
///
/// ```
pub fn render(report: &AggregateReport) -> String {
    let mut out = String::new();

    for (name, entries) in report {
        if entries.is_empty() {
            continue;
        }
        let _ = write!(out, "\n#### {}\n\n", name);
        for entry in entries {
            let _ = write!(out, "{}\n\n", entry);
        }
    }

    out
}

/// Write the rendered report to `path`, replacing any previous report.
pub fn write_report(report: &AggregateReport, path: &Path) -> Result<()> {
    fs::write(path, render(report))
        .with_context(|| format!("failed to write {}", path.display()))
}
