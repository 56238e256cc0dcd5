use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// One line of log output exactly as read, line terminator included.
///
/// Lines are kept as raw bytes so that re-emitting them reproduces the
/// input byte-for-byte, even when a compiler prints text that is not valid
/// UTF-8. Ordering is byte-wise, which matches code-point order for UTF-8.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Line(Vec<u8>);

impl Line {
    /// Wrap raw bytes read from a log.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw bytes, terminator included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Total length in bytes, terminator included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for a zero-length line.
    ///
    /// A line reader never produces one; a bare `"\n"` is not empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the line ends with `\n`.
    pub fn is_terminated(&self) -> bool {
        self.0.last() == Some(&b'\n')
    }

    /// The bytes with a trailing `\n` or `\r\n` removed.
    pub fn content(&self) -> &[u8] {
        let bytes = self.0.strip_suffix(b"\n").unwrap_or(&self.0);
        bytes.strip_suffix(b"\r").unwrap_or(bytes)
    }

    /// The line as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Returns `true` if the line begins with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }

    /// Consume the line, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({:?})", self.text())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<Vec<u8>> for Line {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text())
    }
}
