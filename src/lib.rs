//! Mdtodo - tagged comment collector for markdown trees
//!
//! Mdtodo is a CLI tool and library that scans a directory tree for markdown
//! files, extracts HTML-style comment blocks, recognizes the
//! `TODO(author): text` / `HERE(author): text` convention, and writes a
//! consolidated `todo.md` report grouping the comments by source file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, exit codes)
//! - `annotation`: Comment entry type and tagged-comment classification
//! - `lines`: Line source supplying right-trimmed, non-empty lines per file
//! - `scanner`: HTML comment extraction state machine
//! - `walker`: Directory traversal and per-file aggregation
//! - `report`: Report rendering and output file writing

pub mod annotation;
pub mod cli;
pub mod lines;
pub mod report;
pub mod scanner;
pub mod walker;
