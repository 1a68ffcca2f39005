#![forbid(unsafe_code)]

//! Algorithm drivers and the shared run harness.
//!
//! Each driver is a deterministic function of the starting array producing
//! a totally ordered sequence of steps; every phase ends in at least one
//! [`SortRun::step`] call before the next comparison or mutation becomes
//! observable. All five share the run shape enforced by [`run_sort`]:
//! hold the permit through the phases, release it, then emit one final
//! all-sorted frame.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use tracing::info;

use sortviz_core::highlight::{HighlightMap, Role};
use sortviz_core::session::SortPermit;
use sortviz_core::step::{Algorithm, Step, StepKind};

use crate::emitter::{StepEmitter, StepSink};
use crate::item::SortItem;

/// Working state of one driver invocation: the items being sorted plus the
/// emitter that paces and publishes steps.
pub struct SortRun<S: StepSink, T: SortItem = u32> {
    algorithm: Algorithm,
    items: Vec<T>,
    emitter: StepEmitter<S>,
}

impl<S: StepSink, T: SortItem> SortRun<S, T> {
    pub fn new(algorithm: Algorithm, items: Vec<T>, emitter: StepEmitter<S>) -> Self {
        Self {
            algorithm,
            items,
            emitter,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn key(&self, index: usize) -> u32 {
        self.items[index].key()
    }

    fn snapshot(&self) -> Vec<u32> {
        self.items.iter().map(SortItem::key).collect()
    }

    /// Emit one step and suspend for the current delay.
    pub(crate) async fn step(&mut self, kind: StepKind, highlights: HighlightMap, context: String) {
        let step = Step {
            algorithm: self.algorithm,
            kind,
            snapshot: self.snapshot(),
            highlights,
            context,
        };
        self.emitter.emit(step).await;
    }

    /// The final frame: every index sorted.
    async fn finale(&mut self) {
        let highlights = HighlightMap::all(self.items.len(), Role::Sorted);
        let context = format!("{} finished; the array is fully sorted.", self.algorithm);
        self.step(StepKind::Finished, highlights, context).await;
    }

    fn into_parts(self) -> (Vec<T>, StepEmitter<S>) {
        (self.items, self.emitter)
    }
}

/// Run one algorithm to completion.
///
/// The permit is held across every mutation and released before the final
/// all-sorted frame, so the terminal state observable by the UI is: flag
/// clear, values non-descending.
pub async fn run_sort<S: StepSink, T: SortItem>(
    algorithm: Algorithm,
    items: Vec<T>,
    emitter: StepEmitter<S>,
    permit: SortPermit,
) -> Vec<T> {
    info!(algorithm = algorithm.name(), len = items.len(), "sort started");
    let mut run = SortRun::new(algorithm, items, emitter);
    match algorithm {
        Algorithm::Bubble => bubble::drive(&mut run).await,
        Algorithm::Selection => selection::drive(&mut run).await,
        Algorithm::Insertion => insertion::drive(&mut run).await,
        Algorithm::Merge => merge::drive(&mut run).await,
        Algorithm::Quick => quick::drive(&mut run).await,
    }
    drop(permit);
    run.finale().await;
    info!(algorithm = algorithm.name(), "sort finished");
    let (items, _emitter) = run.into_parts();
    items
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use crate::emitter::{TraceSink, unpaced};
    use sortviz_core::session::SortingFlag;

    /// Drive `algorithm` over `values` with no pacing, returning the final
    /// array and the recorded step trace.
    pub(crate) fn run_traced(algorithm: Algorithm, values: Vec<u32>) -> (Vec<u32>, Vec<Step>) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("runtime");
        runtime.block_on(async move {
            let flag = SortingFlag::new();
            let permit = flag.try_acquire().expect("flag free");
            let mut sink = TraceSink::new();
            let sorted = run_sort(algorithm, values, unpaced(&mut sink), permit).await;
            (sorted, sink.steps)
        })
    }
}
