//! Block diff engine for build logs.
//!
//! Two logs are segmented independently and walked in lockstep. Blocks that
//! differ are folded into a map keyed by block content, where a block seen
//! as removed on one side and added on the other cancels out. What survives
//! is the symmetric difference of the two logs' blocks, insensitive to the
//! order parallel build jobs printed them in.
//!
//! # Key Types
//!
//! - [`BlockDiff`] / [`DiffEntry`] -- Surviving blocks tagged with a [`Sign`]
//! - [`diff_streams`] / [`diff_logs`] -- The lockstep walk
//! - [`write_report`] / [`ReportOptions`] -- Unified-style or JSON output

pub mod block_diff;
pub mod error;
pub mod lockstep;
pub mod report;

pub use bl_types::Sign;
pub use block_diff::{BlockDiff, DiffEntry};
pub use error::{DiffError, DiffResult};
pub use lockstep::{diff_blocks, diff_logs, diff_streams, LockstepStats};
pub use report::{write_report, ReportFormat, ReportOptions};
