//! Lockstep walk over two block streams.
//!
//! Both streams advance one block per step. A step whose two blocks are
//! identical is skipped outright. Every other step records the first
//! stream's block as removed and the second's as added in a [`BlockDiff`],
//! whose cancel rule then reconciles blocks that merely changed position.
//! When one stream runs out first, the remaining steps contribute only the
//! other stream's block.

use std::convert::Infallible;
use std::io::BufRead;

use bl_segment::Segmenter;
use bl_types::{Block, Sign};
use tracing::debug;

use crate::block_diff::BlockDiff;
use crate::error::DiffResult;

/// Counters from one lockstep walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockstepStats {
    /// Steps taken, including skipped ones.
    pub steps: usize,
    /// Steps whose blocks were identical.
    pub skipped: usize,
}

/// Diff two fallible block streams.
///
/// The first error from either stream aborts the walk.
pub fn diff_streams<A, B, E>(old: A, new: B) -> Result<(BlockDiff, LockstepStats), E>
where
    A: IntoIterator<Item = Result<Block, E>>,
    B: IntoIterator<Item = Result<Block, E>>,
{
    let mut old = old.into_iter().fuse();
    let mut new = new.into_iter().fuse();
    let mut diff = BlockDiff::new();
    let mut stats = LockstepStats::default();

    loop {
        let a = old.next().transpose()?;
        let b = new.next().transpose()?;
        if a.is_none() && b.is_none() {
            break;
        }
        stats.steps += 1;

        if a == b {
            stats.skipped += 1;
            continue;
        }
        if let Some(a) = a {
            diff.record(a, Sign::Removed);
        }
        if let Some(b) = b {
            diff.record(b, Sign::Added);
        }
    }

    debug!(
        steps = stats.steps,
        skipped = stats.skipped,
        surviving = diff.len(),
        "lockstep walk complete"
    );
    Ok((diff, stats))
}

/// Diff two already segmented logs.
pub fn diff_blocks(old: Vec<Block>, new: Vec<Block>) -> BlockDiff {
    let old = old.into_iter().map(Ok::<_, Infallible>);
    let new = new.into_iter().map(Ok::<_, Infallible>);
    match diff_streams(old, new) {
        Ok((diff, _)) => diff,
        Err(never) => match never {},
    }
}

/// Segment and diff two logs read from `old` and `new`.
pub fn diff_logs<A: BufRead, B: BufRead>(old: A, new: B) -> DiffResult<BlockDiff> {
    let (diff, _) = diff_streams(Segmenter::from_reader(old), Segmenter::from_reader(new))?;
    Ok(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bl_segment::{segment_str, SegmentError};
    use bl_types::Line;
    use proptest::prelude::*;
    use std::io;

    fn block(text: &str) -> Block {
        text.split_inclusive('\n').map(Line::from).collect()
    }

    fn diff_str(old: &str, new: &str) -> BlockDiff {
        diff_logs(old.as_bytes(), new.as_bytes()).unwrap()
    }

    #[test]
    fn identical_logs_have_no_diff() {
        let log = "CC a.o\nsrc/a.c:1: warning: x\nsrc/a.c:2: warning: y\n";
        assert!(diff_str(log, log).is_empty());
    }

    #[test]
    fn empty_logs_have_no_diff() {
        assert!(diff_str("", "").is_empty());
    }

    #[test]
    fn warning_scenario() {
        let diff = diff_str(
            "foo.c:1: warning: x\nfoo.c:2: warning: y\n",
            "foo.c:1: warning: x\nbar.c:5: warning: z\n",
        );
        assert_eq!(diff.len(), 2);
        assert_eq!(diff.get(&block("foo.c:2: warning: y\n")), Some(Sign::Removed));
        assert_eq!(diff.get(&block("bar.c:5: warning: z\n")), Some(Sign::Added));
        assert_eq!(diff.get(&block("foo.c:1: warning: x\n")), None);
    }

    #[test]
    fn swapped_blocks_cancel() {
        let diff = diff_str("A\nB\nC\n", "B\nA\nC\n");
        assert!(diff.is_empty());
    }

    #[test]
    fn longer_new_log_adds_tail() {
        let diff = diff_str("a\n", "a\nb\nc\n");
        assert_eq!(diff.additions(), 2);
        assert_eq!(diff.removals(), 0);
    }

    #[test]
    fn longer_old_log_removes_tail() {
        let diff = diff_str("a\nb\n", "a\n");
        assert_eq!(diff.removals(), 1);
        assert_eq!(diff.get(&block("b\n")), Some(Sign::Removed));
    }

    #[test]
    fn moved_block_past_end_of_shorter_log_cancels() {
        let diff = diff_str("x\n", "y\nx\n");
        assert_eq!(diff.len(), 1);
        assert_eq!(diff.get(&block("y\n")), Some(Sign::Added));
    }

    #[test]
    fn multiline_blocks_are_compared_whole() {
        let old = "In file included from a.h:1,\n  from b.c:2:\n";
        let new = "In file included from a.h:1,\n  from c.c:2:\n";
        let diff = diff_str(old, new);
        assert_eq!(diff.len(), 2);
        assert_eq!(diff.removals(), 1);
        assert_eq!(diff.additions(), 1);
    }

    #[test]
    fn stats_count_skipped_steps() {
        let old = segment_str("a\nb\nc\n").into_iter().map(Ok::<_, Infallible>);
        let new = segment_str("a\nx\nc\nd\n").into_iter().map(Ok::<_, Infallible>);
        let (_, stats) = diff_streams(old, new).unwrap();
        assert_eq!(stats, LockstepStats { steps: 4, skipped: 2 });
    }

    #[test]
    fn stream_errors_propagate() {
        let old = vec![Ok(block("a\n"))];
        let new = vec![Err(SegmentError::Io(io::Error::new(io::ErrorKind::Other, "gone")))];
        assert!(diff_streams(old, new).is_err());
    }

    #[test]
    fn diff_blocks_matches_diff_logs() {
        let old = "p/a.c:1: w\nq\n";
        let new = "q\np/a.c:1: w\nr\n";
        assert_eq!(diff_blocks(segment_str(old), segment_str(new)), diff_str(old, new));
    }

    fn distinct_lines() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::btree_set("[a-z]{1,6}", 0..12)
            .prop_map(|set| set.into_iter().map(|s| format!("{s}\n")).collect())
    }

    fn log_text() -> impl Strategy<Value = String> {
        proptest::collection::vec("([a-b]/[a-b]\\.c:[0-2]: w|[a-d]{1,2})\n", 0..20)
            .prop_map(|lines| lines.concat())
    }

    proptest! {
        #[test]
        fn self_diff_is_empty(log in log_text()) {
            prop_assert!(diff_str(&log, &log).is_empty());
        }

        #[test]
        fn swapping_inputs_swaps_signs(x in log_text(), y in log_text()) {
            let forward = diff_str(&x, &y);
            let backward = diff_str(&y, &x);
            prop_assert_eq!(forward.reversed(), backward);
        }

        #[test]
        fn reordering_distinct_blocks_is_invisible(
            (lines, shuffled) in distinct_lines()
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        ) {
            prop_assert!(diff_str(&lines.concat(), &shuffled.concat()).is_empty());
        }
    }
}
