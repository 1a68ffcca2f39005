#![forbid(unsafe_code)]

//! Cross-driver behavior: golden traces, sort correctness over arbitrary
//! inputs, stability, and permit lifecycle.

use proptest::prelude::*;

use sortviz_core::highlight::Role;
use sortviz_core::session::SortingFlag;
use sortviz_core::step::{Algorithm, Step, StepKind};
use sortviz_engine::{SortItem, TraceSink, run_sort, unpaced};

/// Drive `algorithm` over `items` with no pacing, returning the final array
/// and the full step trace.
fn run_traced<T: SortItem>(algorithm: Algorithm, items: Vec<T>) -> (Vec<T>, Vec<Step>) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");
    runtime.block_on(async move {
        let flag = SortingFlag::new();
        let permit = flag.try_acquire().expect("flag free");
        let mut sink = TraceSink::new();
        let sorted = run_sort(algorithm, items, unpaced(&mut sink), permit).await;
        assert!(!flag.is_held(), "permit must be released by run_sort");
        (sorted, sink.steps)
    })
}

/// Element carrying an identity alongside its comparison key, to make the
/// relative order of duplicates observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tagged {
    value: u32,
    tag: usize,
}

impl SortItem for Tagged {
    fn key(&self) -> u32 {
        self.value
    }
}

fn tagged(values: &[u32]) -> Vec<Tagged> {
    values
        .iter()
        .enumerate()
        .map(|(tag, &value)| Tagged { value, tag })
        .collect()
}

#[test]
fn bubble_golden_trace() {
    let (sorted, steps) = run_traced(Algorithm::Bubble, vec![5u32, 3, 8, 1]);
    assert_eq!(sorted, vec![1, 3, 5, 8]);

    // (kind, snapshot after the step, indices highlighted)
    let expected: &[(StepKind, &[u32], &[usize])] = &[
        (StepKind::Compare, &[5, 3, 8, 1], &[0, 1]),
        (StepKind::Swap, &[3, 5, 8, 1], &[0, 1]),
        (StepKind::Compare, &[3, 5, 8, 1], &[1, 2]),
        (StepKind::Compare, &[3, 5, 8, 1], &[2, 3]),
        (StepKind::Swap, &[3, 5, 1, 8], &[2, 3]),
        (StepKind::Compare, &[3, 5, 1, 8], &[0, 1]),
        (StepKind::Compare, &[3, 5, 1, 8], &[1, 2]),
        (StepKind::Swap, &[3, 1, 5, 8], &[1, 2]),
        (StepKind::Compare, &[3, 1, 5, 8], &[0, 1]),
        (StepKind::Swap, &[1, 3, 5, 8], &[0, 1]),
        (StepKind::Finished, &[1, 3, 5, 8], &[0, 1, 2, 3]),
    ];

    assert_eq!(steps.len(), expected.len());
    for (step, (kind, snapshot, indices)) in steps.iter().zip(expected) {
        assert_eq!(step.kind, *kind);
        assert_eq!(step.snapshot, *snapshot);
        assert_eq!(step.highlights.len(), indices.len());
        for &index in *indices {
            assert!(step.highlights.get(index).is_some(), "index {index} in {step:?}");
        }
    }

    // First comparison marks indices 0 and 1 as comparing, and the swap that
    // follows marks them as swapping.
    assert_eq!(steps[0].highlights.get(0), Some(Role::Comparing));
    assert_eq!(steps[0].highlights.get(1), Some(Role::Comparing));
    assert_eq!(steps[1].highlights.get(0), Some(Role::Swapping));
    assert_eq!(steps[1].highlights.get(1), Some(Role::Swapping));
}

#[test]
fn traces_are_deterministic() {
    for algorithm in Algorithm::ALL {
        let (_, first) = run_traced(algorithm, vec![5u32, 3, 8, 1]);
        let (_, second) = run_traced(algorithm, vec![5u32, 3, 8, 1]);
        assert_eq!(first, second, "{algorithm}");
    }
}

#[test]
fn merge_sort_is_stable() {
    let (sorted, _) = run_traced(Algorithm::Merge, tagged(&[2, 1, 2, 1, 2, 0]));
    let keys: Vec<u32> = sorted.iter().map(|t| t.value).collect();
    assert_eq!(keys, vec![0, 1, 1, 2, 2, 2]);
    // Duplicates keep their input order.
    let tags: Vec<usize> = sorted.iter().map(|t| t.tag).collect();
    assert_eq!(tags, vec![5, 1, 3, 0, 2, 4]);
}

#[test]
fn insertion_sort_is_stable() {
    let (sorted, _) = run_traced(Algorithm::Insertion, tagged(&[3, 3, 1, 3, 1]));
    let tags: Vec<usize> = sorted.iter().map(|t| t.tag).collect();
    assert_eq!(tags, vec![2, 4, 0, 1, 3]);
}

#[test]
fn swap_based_drivers_keep_every_snapshot_a_permutation() {
    // Merge and insertion copy values around and may duplicate them
    // transiently; the swap-only drivers never do.
    for algorithm in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Quick] {
        let input = vec![9u32, 0, 42, 7, 7, 13];
        let mut expected = input.clone();
        expected.sort_unstable();

        let (_, steps) = run_traced(algorithm, input);
        for step in &steps {
            let mut snapshot = step.snapshot.clone();
            snapshot.sort_unstable();
            assert_eq!(snapshot, expected, "{algorithm}");
        }
    }
}

#[test]
fn permit_released_even_when_a_driver_task_dies() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");
    runtime.block_on(async {
        let flag = SortingFlag::new();
        let permit = flag.try_acquire().expect("flag free");
        let handle = tokio::spawn(async move {
            let _held = permit;
            panic!("driver fault");
        });
        assert!(handle.await.is_err());
        assert!(!flag.is_held());
    });
}

proptest! {
    #[test]
    fn all_drivers_sort_any_input(
        values in prop::collection::vec(0u32..100, 1..=30),
        algorithm_index in 0usize..5,
    ) {
        let algorithm = Algorithm::ALL[algorithm_index];
        let mut expected = values.clone();
        expected.sort_unstable();

        let (sorted, steps) = run_traced(algorithm, values);
        prop_assert_eq!(&sorted, &expected);

        // Finale covers every index with the sorted role.
        let finale = steps.last().expect("finale");
        prop_assert_eq!(finale.kind, StepKind::Finished);
        for index in 0..sorted.len() {
            prop_assert_eq!(finale.highlights.get(index), Some(Role::Sorted));
        }
    }
}
