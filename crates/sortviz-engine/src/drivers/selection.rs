#![forbid(unsafe_code)]

//! Selection sort driver.
//!
//! Every outer position gets a pass-start frame, every scanned index a
//! comparing frame alongside the current minimum, and a fresh frame is
//! emitted whenever the minimum moves (strict `<`). The closing swap frame
//! only appears when the minimum actually moved.

use sortviz_core::highlight::{HighlightMap, Role};
use sortviz_core::step::StepKind;

use crate::emitter::StepSink;
use crate::item::SortItem;

use super::SortRun;

/// Highlight for one scan position. Insertion order matters: when the
/// minimum coincides with `i` or `j`, the current-minimum role wins.
fn scan_highlight(i: usize, j: usize, min_index: usize) -> HighlightMap {
    let mut highlights = HighlightMap::new();
    highlights.set(i, Role::CurrentIndex);
    highlights.set(j, Role::Comparing);
    highlights.set(min_index, Role::CurrentMinimum);
    highlights
}

pub(super) async fn drive<S: StepSink, T: SortItem>(run: &mut SortRun<S, T>) {
    let n = run.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;

        let mut highlights = HighlightMap::new();
        highlights.set(i, Role::CurrentIndex);
        run.step(
            StepKind::PassStart,
            highlights,
            format!("Looking for the smallest value from position {i} onward."),
        )
        .await;

        for j in i + 1..n {
            run.step(
                StepKind::Compare,
                scan_highlight(i, j, min_index),
                format!(
                    "Comparing position {j} with the current minimum at position {min_index}."
                ),
            )
            .await;

            if run.key(j) < run.key(min_index) {
                min_index = j;
                run.step(
                    StepKind::NewMinimum,
                    scan_highlight(i, j, min_index),
                    format!("Position {j} holds a new smallest value, {}.", run.key(j)),
                )
                .await;
            }
        }

        if min_index != i {
            run.items.swap(i, min_index);
            let mut highlights = HighlightMap::new();
            highlights.set(i, Role::Swap);
            highlights.set(min_index, Role::Swap);
            run.step(
                StepKind::Swap,
                highlights,
                format!("Swapped the smallest value, {}, into position {i}.", run.key(i)),
            )
            .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::run_traced;
    use sortviz_core::highlight::Role;
    use sortviz_core::step::{Algorithm, StepKind};

    #[test]
    fn sorts_and_swaps_only_when_minimum_moved() {
        let (sorted, steps) = run_traced(Algorithm::Selection, vec![2, 1, 3]);
        assert_eq!(sorted, vec![1, 2, 3]);
        // Only the first pass moves anything: min 1 sits at index 1.
        let swaps = steps.iter().filter(|s| s.kind == StepKind::Swap).count();
        assert_eq!(swaps, 1);
    }

    #[test]
    fn minimum_role_wins_when_it_coincides_with_the_pass_index() {
        let (_, steps) = run_traced(Algorithm::Selection, vec![1, 2, 3]);
        // First scan frame: i = 0, j = 1, minimum still at 0.
        let scan = steps
            .iter()
            .find(|s| s.kind == StepKind::Compare)
            .expect("scan frame");
        assert_eq!(scan.highlights.get(0), Some(Role::CurrentMinimum));
        assert_eq!(scan.highlights.get(1), Some(Role::Comparing));
    }

    #[test]
    fn new_minimum_emits_an_extra_frame() {
        let (_, steps) = run_traced(Algorithm::Selection, vec![3, 1, 2]);
        let new_minimums = steps
            .iter()
            .filter(|s| s.kind == StepKind::NewMinimum)
            .collect::<Vec<_>>();
        // Pass 0 finds 1 at index 1; pass 1 scans [3, 2] and finds 2.
        assert_eq!(new_minimums.len(), 2);
        assert_eq!(new_minimums[0].highlights.get(1), Some(Role::CurrentMinimum));
    }
}
