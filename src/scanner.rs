//! HTML comment extraction.
//!
//! A single forward pass over the lines of one file, pulling out the body of
//! every `<!-- ... -->` block. Comments may span any number of lines; the
//! fragments are space-joined into one body with the markers excluded. The
//! scanner never looks for a new opening marker while a comment is open, so
//! nested comments are not recognized.

use std::io;
use std::mem;
use std::sync::LazyLock;

use regex::Regex;

// Everything on the line after the first opening marker.
static COMMENT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--(?P<txt>.*)").unwrap());

// Everything before a closing marker. The greedy capture reaches the last
// `-->` on the line, so stray marker pairs inside one line end up in the body.
static COMMENT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<txt>.*)-->").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Seeking,
    InComment,
}

/// Two-state machine extracting comment bodies from right-trimmed,
/// non-empty lines.
#[derive(Debug)]
pub struct Scanner {
    state: State,
    comment: String,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: State::Seeking,
            comment: String::new(),
        }
    }

    /// Feed one line, returning the completed comment body if this line
    /// closed one.
    ///
    /// An opening marker that is never closed before the input ends produces
    /// no comment; the accumulated text is silently dropped.
    pub fn feed(&mut self, line: &str) -> Option<String> {
        match self.state {
            State::Seeking => {
                let candidate = COMMENT_OPEN.captures(line)?["txt"].trim().to_string();
                match COMMENT_CLOSE.captures(&candidate) {
                    Some(end) => Some(end["txt"].trim().to_string()),
                    None => {
                        self.comment = candidate;
                        self.state = State::InComment;
                        None
                    }
                }
            }
            State::InComment => match COMMENT_CLOSE.captures(line) {
                Some(end) => {
                    self.comment.push(' ');
                    self.comment.push_str(end["txt"].trim());
                    self.state = State::Seeking;
                    Some(mem::take(&mut self.comment))
                }
                None => {
                    self.comment.push(' ');
                    self.comment.push_str(line);
                    None
                }
            },
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy stream of comment bodies over a line source.
///
/// Wraps a fallible line iterator (see [`crate::lines::LineSource`]) and a
/// [`Scanner`]; lines are consumed only as bodies are demanded, and read
/// errors surface in place of a body.
pub struct Comments<I> {
    lines: I,
    scanner: Scanner,
}

impl<I> Comments<I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            scanner: Scanner::new(),
        }
    }
}

impl<I: Iterator<Item = io::Result<String>>> Iterator for Comments<I> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    if let Some(body) = self.scanner.feed(&line) {
                        return Some(Ok(body));
                    }
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
