//! Raw line reading with terminators preserved.

use std::io::{self, BufRead};

use bl_types::Line;

/// Pull iterator over the lines of a buffered reader.
///
/// Each [`Line`] keeps its `\n` (or `\r\n`) terminator. A final line
/// without a terminator is yielded as-is. Lines may be arbitrarily long.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    lines_read: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            lines_read: 0,
        }
    }

    /// Number of lines yielded so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.inner.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                self.lines_read += 1;
                Some(Ok(Line::from_bytes(buf)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
