//! The running block-to-sign map.
//!
//! Each distinct block content has at most one entry. Recording a block
//! with the sign opposite to the one it already carries removes the entry,
//! so a block that moved between the two logs nets out.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use bl_types::{Block, Sign};
use serde::Serialize;

/// Blocks present in only one of two logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockDiff {
    entries: BTreeMap<Block, Sign>,
}

/// A surviving block and the side it survives on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    pub sign: Sign,
    #[serde(rename = "lines")]
    pub block: Block,
}

impl BlockDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one block into the map.
    ///
    /// Absent blocks are inserted with `sign`. A block already tagged with
    /// the opposite sign is removed. A block already tagged with the same
    /// sign is left as is. Empty blocks are ignored.
    pub fn record(&mut self, block: Block, sign: Sign) {
        if block.is_empty() {
            return;
        }
        match self.entries.entry(block) {
            Entry::Vacant(slot) => {
                slot.insert(sign);
            }
            Entry::Occupied(slot) => {
                if *slot.get() == sign.opposite() {
                    slot.remove();
                }
            }
        }
    }

    /// Returns `true` if the two logs had no surviving differences.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of surviving blocks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of blocks only in the second log.
    pub fn additions(&self) -> usize {
        self.entries.values().filter(|s| **s == Sign::Added).count()
    }

    /// Number of blocks only in the first log.
    pub fn removals(&self) -> usize {
        self.entries.values().filter(|s| **s == Sign::Removed).count()
    }

    /// The sign recorded for `block`, if it survives.
    pub fn get(&self, block: &Block) -> Option<Sign> {
        self.entries.get(block).copied()
    }

    /// Surviving blocks in block order.
    pub fn iter(&self) -> impl Iterator<Item = (&Block, Sign)> {
        self.entries.iter().map(|(b, s)| (b, *s))
    }

    /// The same diff seen from the other side.
    pub fn reversed(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(b, s)| (b.clone(), s.opposite()))
                .collect(),
        }
    }

    /// Consume the diff, returning entries in block order.
    pub fn into_entries(self) -> Vec<DiffEntry> {
        self.entries
            .into_iter()
            .map(|(block, sign)| DiffEntry { sign, block })
            .collect()
    }
}
