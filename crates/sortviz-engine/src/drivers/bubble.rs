#![forbid(unsafe_code)]

//! Bubble sort driver.
//!
//! Outer pass `i` in `0..n-1`, inner scan `j` in `0..n-1-i`. Every adjacent
//! pair gets a comparing frame; a strict `>` comparison decides the swap, so
//! equal neighbours never exchange, and each swap gets its own frame after
//! the exchange.

use sortviz_core::highlight::{HighlightMap, Role};
use sortviz_core::step::StepKind;

use crate::emitter::StepSink;
use crate::item::SortItem;

use super::SortRun;

pub(super) async fn drive<S: StepSink, T: SortItem>(run: &mut SortRun<S, T>) {
    let n = run.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            let mut highlights = HighlightMap::new();
            highlights.set(j, Role::Comparing);
            highlights.set(j + 1, Role::Comparing);
            run.step(
                StepKind::Compare,
                highlights,
                format!("Comparing the values at positions {j} and {}.", j + 1),
            )
            .await;

            if run.key(j) > run.key(j + 1) {
                let (left, right) = (run.key(j), run.key(j + 1));
                run.items.swap(j, j + 1);

                let mut highlights = HighlightMap::new();
                highlights.set(j, Role::Swapping);
                highlights.set(j + 1, Role::Swapping);
                run.step(
                    StepKind::Swap,
                    highlights,
                    format!("Swapped {left} and {right} because {left} > {right}."),
                )
                .await;
            }
        }
    }
}
