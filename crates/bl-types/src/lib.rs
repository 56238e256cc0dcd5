//! Value types shared by the build log tools.
//!
//! A build log is read as a sequence of [`Line`]s, grouped into [`Block`]s
//! that are sorted and compared as indivisible units. A diff result tags
//! each surviving block with a [`Sign`].
//!
//! # Key Types
//!
//! - [`Line`] -- One raw line of log output, terminator included
//! - [`Block`] -- An ordered, atomic group of lines; a pure value type
//! - [`Sign`] -- Which side of a diff a block belongs to

pub mod block;
pub mod line;
pub mod sign;

pub use block::Block;
pub use line::Line;
pub use sign::Sign;
