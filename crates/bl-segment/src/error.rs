//! Error types for the segmentation crate.

use thiserror::Error;

/// Errors that can occur while segmenting a log.
///
/// Classification itself never fails; every line lands in some block.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for segmentation results.
pub type SegmentResult<T> = Result<T, SegmentError>;
