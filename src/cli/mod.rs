use std::path;

use anyhow::Result;
use colored::Colorize;

use crate::report::write_report;
use crate::walker::scan_tree;

mod args;
mod exit_status;

pub use args::{Arguments, DEFAULT_OUT_FILE};
pub use exit_status::ExitStatus;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Validate the arguments, scan the tree and write the report.
///
/// Usage and root-path problems are reported on stderr and returned as
/// `ExitStatus::Failure` without touching the filesystem; errors hit while
/// walking or writing propagate to the caller and abort the run with no
/// report written.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let [root] = args.paths.as_slice() else {
        eprintln!("You must specify only the root directory path");
        return Ok(ExitStatus::Failure);
    };

    let root = path::absolute(root)?;
    if !root.is_dir() {
        eprintln!("{} is not a valid directory path", root.display());
        return Ok(ExitStatus::Failure);
    }

    let report = scan_tree(&root, args.verbose)?;
    let files_scanned = report.len();
    let comments: usize = report.values().map(Vec::len).sum();

    write_report(&report, &args.output)?;

    println!(
        "{} {} files scanned, {} comments -> {}",
        SUCCESS_MARK.green(),
        files_scanned,
        comments,
        args.output.display()
    );

    Ok(ExitStatus::Success)
}
