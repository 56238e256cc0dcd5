//! Build log segmentation.
//!
//! Parallel builds interleave compiler diagnostics in arbitrary order. This
//! crate splits a log into blocks that belong together, so that higher
//! layers can sort and compare whole blocks instead of single lines.
//!
//! # Key Types
//!
//! - [`LineReader`] -- Pull iterator over raw lines of any `BufRead`
//! - [`Segmenter`] -- Pull iterator turning lines into [`Block`]s
//! - [`BlockKind`] -- Classification of the block being accumulated

pub mod classify;
pub mod error;
pub mod reader;
pub mod segmenter;

pub use bl_types::{Block, Line};
pub use classify::{file_prefix, is_continuation, is_include_start, BlockKind};
pub use error::{SegmentError, SegmentResult};
pub use reader::LineReader;
pub use segmenter::{segment_reader, segment_str, Segmenter};
