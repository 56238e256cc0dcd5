//! Streaming block segmenter.
//!
//! The segmenter holds one block under construction. Each incoming line
//! either extends it or closes it; a closed block is yielded and never
//! revisited. Concatenating the yielded blocks reproduces the input.

use std::io::{self, BufRead};
use std::mem;

use bl_types::{Block, Line};
use tracing::debug;

use crate::classify::{is_include_start, BlockKind};
use crate::error::SegmentError;
use crate::reader::LineReader;

/// Pull iterator that groups lines into [`Block`]s.
///
/// Works in a single forward pass with one line of lookahead. Empty blocks
/// are never yielded. After the first read error the iterator is fused.
pub struct Segmenter<I> {
    lines: I,
    current: Block,
    kind: BlockKind,
    blocks_yielded: usize,
    done: bool,
}

impl<I> Segmenter<I>
where
    I: Iterator<Item = io::Result<Line>>,
{
    /// Segment an iterator of lines.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            current: Block::new(),
            kind: BlockKind::None,
            blocks_yielded: 0,
            done: false,
        }
    }

    /// Number of blocks yielded so far.
    pub fn blocks_yielded(&self) -> usize {
        self.blocks_yielded
    }

    /// Fold one line into the state, returning the block it closed, if any.
    fn feed(&mut self, line: Line) -> Option<Block> {
        let bytes = line.as_bytes();

        // An include-chain start always opens a fresh block, even when it
        // would otherwise continue the current one.
        let starts_chain = is_include_start(bytes);
        if !starts_chain && self.kind.extends(bytes) {
            self.current.push(line);
            return None;
        }

        self.kind = BlockKind::of_line(bytes);
        let closed = mem::replace(&mut self.current, Block::single(line));
        (!closed.is_empty()).then_some(closed)
    }

    fn emit(&mut self, block: Block) -> Option<Result<Block, SegmentError>> {
        self.blocks_yielded += 1;
        Some(Ok(block))
    }
}

impl<R: BufRead> Segmenter<LineReader<R>> {
    /// Segment everything readable from `reader`.
    pub fn from_reader(reader: R) -> Self {
        Self::new(LineReader::new(reader))
    }
}

impl<I> Iterator for Segmenter<I>
where
    I: Iterator<Item = io::Result<Line>>,
{
    type Item = Result<Block, SegmentError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if let Some(closed) = self.feed(line) {
                        return self.emit(closed);
                    }
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    self.kind = BlockKind::None;
                    let last = mem::take(&mut self.current);
                    let result = if last.is_empty() { None } else { self.emit(last) };
                    debug!(blocks = self.blocks_yielded, "segmentation complete");
                    return result;
                }
            }
        }
    }
}

/// Read and segment a whole log into memory.
pub fn segment_reader<R: BufRead>(reader: R) -> Result<Vec<Block>, SegmentError> {
    Segmenter::from_reader(reader).collect()
}

/// Segment in-memory text. Lines are split after each `\n`.
pub fn segment_str(text: &str) -> Vec<Block> {
    let lines = text.split_inclusive('\n').map(|l| Ok(Line::from(l)));
    Segmenter::new(lines).filter_map(Result::ok).collect()
}
