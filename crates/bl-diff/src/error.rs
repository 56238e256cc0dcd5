//! Error types for the diff crate.

use bl_segment::SegmentError;

/// Errors that can occur while diffing two logs.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// Reading or segmenting one of the inputs failed.
    #[error("failed to read log: {0}")]
    Segment(#[from] SegmentError),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization of a JSON report failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
