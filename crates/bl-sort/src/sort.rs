//! Sort driver: segment, order by content, re-emit.

use std::io::{BufRead, Write};

use bl_segment::Segmenter;
use bl_types::Block;
use tracing::debug;

use crate::error::SortResult;

/// Counters from one sort pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of blocks written.
    pub blocks: usize,
    /// Number of lines written.
    pub lines: usize,
    /// Number of bytes written.
    pub bytes: usize,
}

/// Sort blocks into their canonical order.
///
/// Blocks compare line by line, each line byte-wise, and a block that is a
/// prefix of another sorts first. Empty blocks are dropped.
pub fn sort_blocks(blocks: &mut Vec<Block>) {
    blocks.retain(|b| !b.is_empty());
    blocks.sort();
}

/// Read and segment a whole log, returning its blocks in sorted order.
pub fn read_sorted<R: BufRead>(input: R) -> SortResult<Vec<Block>> {
    let mut blocks = Segmenter::from_reader(input).collect::<Result<Vec<_>, _>>()?;
    sort_blocks(&mut blocks);
    Ok(blocks)
}

/// Write blocks back to back, each line verbatim.
pub fn write_blocks<W: Write + ?Sized>(blocks: &[Block], output: &mut W) -> SortResult<SortStats> {
    let mut stats = SortStats::default();
    for block in blocks {
        block.write_to(output)?;
        stats.blocks += 1;
        stats.lines += block.len();
        stats.bytes += block.byte_len();
    }
    output.flush()?;
    Ok(stats)
}

/// Sort a whole log from `input` into `output`.
///
/// The input is read completely before anything is written.
pub fn sort_log<R: BufRead, W: Write + ?Sized>(input: R, output: &mut W) -> SortResult<SortStats> {
    let blocks = read_sorted(input)?;
    let stats = write_blocks(&blocks, output)?;
    debug!(blocks = stats.blocks, lines = stats.lines, "sorted log written");
    Ok(stats)
}
