//! Error types for the sort crate.

use bl_segment::SegmentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("failed to read log: {0}")]
    Segment(#[from] SegmentError),

    #[error("failed to write sorted log: {0}")]
    Io(#[from] std::io::Error),
}

pub type SortResult<T> = Result<T, SortError>;
