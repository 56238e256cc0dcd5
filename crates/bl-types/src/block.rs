use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::line::Line;

/// An ordered group of lines that is sorted and compared as one unit.
///
/// A block has no identity beyond its lines: two blocks are equal iff their
/// lines are equal element-wise, terminators included. The derived ordering
/// compares lines one by one, and a block that is a prefix of another sorts
/// first. This makes `Block` usable directly as a map key.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Block(Vec<Line>);

impl Block {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block holding a single line.
    pub fn single(line: Line) -> Self {
        Self(vec![line])
    }

    /// Append a line to the end of the block.
    pub fn push(&mut self, line: Line) {
        self.0.push(line);
    }

    /// The lines, in order.
    pub fn lines(&self) -> &[Line] {
        &self.0
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the block holds no lines.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total size of the block in bytes.
    pub fn byte_len(&self) -> usize {
        self.0.iter().map(Line::len).sum()
    }

    /// Write every line verbatim.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.0 {
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Consume the block, returning its lines.
    pub fn into_lines(self) -> Vec<Line> {
        self.0
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl From<Vec<Line>> for Block {
    fn from(lines: Vec<Line>) -> Self {
        Self(lines)
    }
}

impl FromIterator<Line> for Block {
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
