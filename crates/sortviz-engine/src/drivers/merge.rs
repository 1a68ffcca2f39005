#![forbid(unsafe_code)]

//! Merge sort driver.
//!
//! Recursive divide at the midpoint, then a stable merge: on equal keys the
//! left-half element wins, preserving the relative order of duplicates.
//! Every frame marks the whole working range and the write cursor. The main
//! merge loop frames the state just before each write; the two drain loops
//! frame it just after. That asymmetry is part of the step contract.

use sortviz_core::highlight::{HighlightMap, Role};
use sortviz_core::step::StepKind;

use crate::emitter::StepSink;
use crate::item::SortItem;

use super::SortRun;

fn range_highlight(left: usize, right: usize, cursor: usize) -> HighlightMap {
    let mut highlights = HighlightMap::new();
    for index in left..=right {
        highlights.set(index, Role::InRange);
    }
    highlights.set(cursor, Role::WritePosition);
    highlights
}

pub(super) async fn drive<S: StepSink, T: SortItem>(run: &mut SortRun<S, T>) {
    let n = run.len();
    if n > 1 {
        sort_range(run, 0, n - 1).await;
    }
}

async fn sort_range<S: StepSink, T: SortItem>(run: &mut SortRun<S, T>, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    Box::pin(sort_range(run, left, mid)).await;
    Box::pin(sort_range(run, mid + 1, right)).await;
    merge(run, left, mid, right).await;
}

async fn merge<S: StepSink, T: SortItem>(
    run: &mut SortRun<S, T>,
    left: usize,
    mid: usize,
    right: usize,
) {
    let lhs: Vec<T> = run.items[left..=mid].to_vec();
    let rhs: Vec<T> = run.items[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut cursor = left;

    while i < lhs.len() && j < rhs.len() {
        run.step(
            StepKind::MergeWrite,
            range_highlight(left, right, cursor),
            format!(
                "Writing the smaller of {} and {} into position {cursor}.",
                lhs[i].key(),
                rhs[j].key()
            ),
        )
        .await;

        // Stable: the left half wins ties.
        if lhs[i].key() <= rhs[j].key() {
            run.items[cursor] = lhs[i];
            i += 1;
        } else {
            run.items[cursor] = rhs[j];
            j += 1;
        }
        cursor += 1;
    }

    while i < lhs.len() {
        run.items[cursor] = lhs[i];
        run.step(
            StepKind::MergeWrite,
            range_highlight(left, right, cursor),
            format!(
                "Copied the leftover value {} into position {cursor}.",
                lhs[i].key()
            ),
        )
        .await;
        i += 1;
        cursor += 1;
    }

    while j < rhs.len() {
        run.items[cursor] = rhs[j];
        run.step(
            StepKind::MergeWrite,
            range_highlight(left, right, cursor),
            format!(
                "Copied the leftover value {} into position {cursor}.",
                rhs[j].key()
            ),
        )
        .await;
        j += 1;
        cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::run_traced;
    use sortviz_core::highlight::Role;
    use sortviz_core::step::{Algorithm, StepKind};

    #[test]
    fn sorts_and_frames_every_write() {
        let (sorted, steps) = run_traced(Algorithm::Merge, vec![5, 3, 8, 1]);
        assert_eq!(sorted, vec![1, 3, 5, 8]);
        // n log n writes for n = 4: merges of [5,3], [8,1], then the final
        // four-way merge, one frame each.
        let writes = steps
            .iter()
            .filter(|s| s.kind == StepKind::MergeWrite)
            .count();
        assert_eq!(writes, 8);
    }

    #[test]
    fn frames_mark_range_and_cursor() {
        let (_, steps) = run_traced(Algorithm::Merge, vec![2, 1]);
        let first = &steps[0];
        assert_eq!(first.kind, StepKind::MergeWrite);
        assert_eq!(first.highlights.get(0), Some(Role::WritePosition));
        assert_eq!(first.highlights.get(1), Some(Role::InRange));
        // Main-loop frame precedes the write: snapshot is still unsorted.
        assert_eq!(first.snapshot, vec![2, 1]);
    }

    #[test]
    fn drain_frame_follows_the_write() {
        let (_, steps) = run_traced(Algorithm::Merge, vec![2, 1]);
        // Second frame: 2 drains from the left buffer after 1 was placed.
        let second = &steps[1];
        assert_eq!(second.kind, StepKind::MergeWrite);
        assert_eq!(second.snapshot, vec![1, 2]);
        assert_eq!(second.highlights.get(1), Some(Role::WritePosition));
    }
}
