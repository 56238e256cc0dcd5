//! Canonical ordering of build logs.
//!
//! A log is segmented into blocks, the blocks are sorted by content, and
//! written back out. Two logs of the same build then line up regardless of
//! the order in which parallel jobs printed their diagnostics.
//!
//! # Key Types
//!
//! - [`sort_blocks`] -- Sort a block vector in place
//! - [`sort_log`] / [`SortStats`] -- Read, sort, and write a whole log

pub mod error;
pub mod sort;

pub use error::{SortError, SortResult};
pub use sort::{read_sorted, sort_blocks, sort_log, write_blocks, SortStats};
