//! Plumbing shared by the `blsort` and `bldiff` binaries.

pub mod cli;
pub mod commands;
pub mod logging;
