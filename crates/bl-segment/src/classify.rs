//! Line recognizers for block segmentation.
//!
//! Three shapes of compiler output are recognized:
//!
//! - GCC include chains: a line `In file included from ...` followed by
//!   indented `from ...` lines.
//! - File-prefixed diagnostics: `dir/file.c:12: warning: ...`, where the
//!   leading token contains a `/` and is followed by `:`.
//! - Anything else, which stands alone.
//!
//! Whitespace means ASCII whitespace including vertical tab and form feed.

/// Marker that opens a GCC include chain.
const INCLUDE_START: &[u8] = b"In file included from ";

/// Classification of the block currently being accumulated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BlockKind {
    /// No block is open yet.
    #[default]
    None,
    /// An `In file included from` chain and its indented continuations.
    IncludeChain,
    /// Consecutive lines sharing a path prefix (text before the first `:`).
    FilePrefixed(Vec<u8>),
    /// A single unrecognized line.
    Plain,
}

impl BlockKind {
    /// Returns `true` if `line` belongs to an open block of this kind.
    ///
    /// Include chains take indented lines; file-prefixed blocks take lines
    /// starting with the same prefix and a colon. Nothing else grows.
    pub fn extends(&self, line: &[u8]) -> bool {
        match self {
            BlockKind::IncludeChain => is_continuation(line),
            BlockKind::FilePrefixed(prefix) => {
                line.starts_with(prefix) && line.get(prefix.len()) == Some(&b':')
            }
            BlockKind::None | BlockKind::Plain => false,
        }
    }

    /// Classify a line that starts a new block.
    pub fn of_line(line: &[u8]) -> Self {
        if is_include_start(line) {
            BlockKind::IncludeChain
        } else if let Some(prefix) = file_prefix(line) {
            BlockKind::FilePrefixed(prefix.to_vec())
        } else {
            BlockKind::Plain
        }
    }
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Matches `^In file included from .+`.
pub fn is_include_start(line: &[u8]) -> bool {
    match line.strip_prefix(INCLUDE_START) {
        Some(rest) => rest.first().is_some_and(|&b| b != b'\n'),
        None => false,
    }
}

/// Matches `^\s+`: the line starts with whitespace.
///
/// A bare `"\n"` counts, so blank lines stay inside an include chain.
pub fn is_continuation(line: &[u8]) -> bool {
    line.first().copied().is_some_and(is_space)
}

/// Returns the path prefix of a file-prefixed line, if it is one.
///
/// The line must match `^[^\s]+/[^\s]+:`. The prefix is everything before
/// the first `:`.
pub fn file_prefix(line: &[u8]) -> Option<&[u8]> {
    let token_end = line.iter().position(|&b| is_space(b)).unwrap_or(line.len());
    let token = &line[..token_end];

    // Need `x/` ... `y:` inside the leading token.
    let slash = token.iter().skip(1).position(|&b| b == b'/')? + 1;
    let last_colon = token.iter().rposition(|&b| b == b':')?;
    if last_colon < slash + 2 {
        return None;
    }

    let first_colon = token.iter().position(|&b| b == b':')?;
    Some(&line[..first_colon])
}
