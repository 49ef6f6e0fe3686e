//! Line source for a single file.

use std::io::{self, BufRead};

/// Iterator over the lines of a reader, with trailing whitespace stripped
/// and lines that are empty after stripping filtered out.
///
/// Read errors are yielded in place and are fatal to the caller; the
/// underlying handle is released when the source is dropped, before the next
/// file is opened.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    line.truncate(line.trim_end().len());
                    if !line.is_empty() {
                        return Some(Ok(line));
                    }
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
