#![forbid(unsafe_code)]

//! Quick sort driver (Lomuto partition, last element as pivot).
//!
//! The scan emits one frame per inspected index: pivot plus comparing when
//! the element stays put, pivot plus a swap overlay when it crosses the
//! boundary. Placing the pivot emits its own frame; the swap role wins when
//! the pivot is already in position. Base case `low >= high` is a no-op.

use sortviz_core::highlight::{HighlightMap, Role};
use sortviz_core::step::StepKind;

use crate::emitter::StepSink;
use crate::item::SortItem;

use super::SortRun;

pub(super) async fn drive<S: StepSink, T: SortItem>(run: &mut SortRun<S, T>) {
    let n = run.len();
    if n > 1 {
        sort_range(run, 0, n - 1).await;
    }
}

async fn sort_range<S: StepSink, T: SortItem>(run: &mut SortRun<S, T>, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot_index = partition(run, low, high).await;
    if pivot_index > 0 {
        Box::pin(sort_range(run, low, pivot_index - 1)).await;
    }
    Box::pin(sort_range(run, pivot_index + 1, high)).await;
}

/// Partition `low..=high` around the value at `high`, returning the pivot's
/// final index. `boundary` tracks the first slot not known to hold a
/// smaller-than-pivot value.
async fn partition<S: StepSink, T: SortItem>(
    run: &mut SortRun<S, T>,
    low: usize,
    high: usize,
) -> usize {
    let pivot = run.key(high);
    let mut boundary = low;

    for j in low..high {
        let mut highlights = HighlightMap::new();
        highlights.set(high, Role::Pivot);
        highlights.set(j, Role::Comparing);

        if run.key(j) < pivot {
            let value = run.key(j);
            run.items.swap(boundary, j);
            highlights.set(boundary, Role::Swap);
            highlights.set(j, Role::Swap);
            run.step(
                StepKind::Swap,
                highlights,
                format!("Moved {value} to the left of the pivot {pivot}."),
            )
            .await;
            boundary += 1;
        } else {
            run.step(
                StepKind::Compare,
                highlights,
                format!(
                    "Position {j} holds {}, which stays right of the pivot {pivot}.",
                    run.key(j)
                ),
            )
            .await;
        }
    }

    run.items.swap(boundary, high);
    let mut highlights = HighlightMap::new();
    highlights.set(boundary, Role::PivotPlaced);
    highlights.set(high, Role::Swap);
    run.step(
        StepKind::PivotPlace,
        highlights,
        format!("Placed the pivot {pivot} at its final position {boundary}."),
    )
    .await;

    boundary
}
