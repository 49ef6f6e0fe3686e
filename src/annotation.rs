//! Classification of raw comment bodies into author/text entries.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Author recorded for comments that do not follow the tagged convention.
pub const UNDEFINED_AUTHOR: &str = "n/a";

// Matches tagged comments anywhere in the body:
// - TODO(alice): fix the intro
// - HERE(bob): resume editing
// The optional space after the colon is not part of the captured text.
static TODO_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(TODO|HERE)\((?P<author>\w+)\):\s?(?P<txt>.*)").unwrap());

/// One annotation extracted from a markdown comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub text: String,
    pub author: String,
}

impl fmt::Display for CommentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  AUTHOR : {}  -  COMMENT: {}", self.author, self.text)
    }
}

/// Convert one raw comment body into an entry.
///
/// Bodies following `TODO(author): text` or `HERE(author): text` get their
/// author token extracted; anything else is kept verbatim under
/// [`UNDEFINED_AUTHOR`]. Never fails, even for empty input.
pub fn classify(body: &str) -> CommentEntry {
    match TODO_TAG.captures(body) {
        Some(caps) => CommentEntry {
            text: caps["txt"].to_string(),
            author: caps["author"].to_string(),
        },
        None => CommentEntry {
            text: body.to_string(),
            author: UNDEFINED_AUTHOR.to_string(),
        },
    }
}
