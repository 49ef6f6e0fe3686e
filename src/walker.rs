//! Directory traversal and per-file comment collection.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use walkdir::WalkDir;

use crate::annotation::{CommentEntry, classify};
use crate::lines::LineSource;
use crate::scanner::Comments;

/// Suffix selecting which files get scanned.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Every scanned file keyed by its suffix-stripped name, in walk order.
/// Files with zero entries are kept; the report writer skips them.
pub type AggregateReport = IndexMap<String, Vec<CommentEntry>>;

/// Collect the comment entries of a single file, in encounter order.
///
/// The handle is fully drained and closed before returning, so at most one
/// file is open at a time during a walk.
pub fn collect_file(path: &Path) -> Result<Vec<CommentEntry>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut entries = Vec::new();
    for body in Comments::new(LineSource::new(BufReader::new(file))) {
        let body = body.with_context(|| format!("failed to read {}", path.display()))?;
        entries.push(classify(&body));
    }

    Ok(entries)
}

/// Walk `root` and collect entries from every `.md` file underneath it.
///
/// The walk is sorted by file name so the report is stable across runs.
/// When two files collide on their suffix-stripped name, the one visited
/// later overwrites the earlier list; the key keeps its original position.
/// Any walk or read error aborts the scan.
pub fn scan_tree(root: &Path, verbose: bool) -> Result<AggregateReport> {
    let mut report = AggregateReport::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let Some(stem) = name.strip_suffix(MARKDOWN_SUFFIX) else {
            continue;
        };

        if verbose {
            eprintln!("scanning {}", entry.path().display());
        }
        let entries = collect_file(entry.path())?;
        report.insert(stem.to_string(), entries);
    }

    Ok(report)
}
