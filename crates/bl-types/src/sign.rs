use std::fmt;

use serde::{Deserialize, Serialize};

/// Which input a diffed block survives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    /// Present in the first log only.
    Removed,
    /// Present in the second log only.
    Added,
}

impl Sign {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Sign::Removed => Sign::Added,
            Sign::Added => Sign::Removed,
        }
    }

    /// The unified-diff line marker, `-` or `+`.
    pub fn marker(self) -> u8 {
        match self {
            Sign::Removed => b'-',
            Sign::Added => b'+',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Removed => write!(f, "removed"),
            Sign::Added => write!(f, "added"),
        }
    }
}
