//! CLI argument definitions using clap.
//!
//! Mdtodo has a single mode of operation: scan one root directory and write
//! the aggregated report. The root directory is taken as trailing positional
//! arguments on purpose, so the "exactly one path" rule can be enforced with
//! a dedicated message instead of clap's generic one.

use std::path::PathBuf;

use clap::Parser;

/// Default location of the generated report, relative to the working directory.
pub const DEFAULT_OUT_FILE: &str = "./todo.md";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Root directory to scan for markdown files
    #[arg(value_name = "ROOT_DIR")]
    pub paths: Vec<PathBuf>,

    /// Where to write the report
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    pub output: PathBuf,

    /// List each scanned file on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
