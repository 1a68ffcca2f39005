#![forbid(unsafe_code)]

//! The step emitter: synchronous handoff to a sink, then a timed suspend.
//!
//! Exactly one sink handoff happens per [`StepEmitter::emit`] call; steps
//! are never skipped or coalesced. The suspension duration is whatever the
//! shared [`DelayHandle`] reads at call time, so an in-flight animation
//! changes pace when the delay changes.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use sortviz_core::session::DelayHandle;
use sortviz_core::step::Step;

/// Receives each emitted step synchronously, before the pause begins.
///
/// The app forwards steps into its render loop over a channel; tests record
/// them with [`TraceSink`].
pub trait StepSink {
    fn accept(&mut self, step: Step);
}

impl<S: StepSink> StepSink for &mut S {
    fn accept(&mut self, step: Step) {
        (**self).accept(step);
    }
}

impl StepSink for UnboundedSender<Step> {
    fn accept(&mut self, step: Step) {
        // A closed receiver means the UI is gone; the run still completes.
        let _ = self.send(step);
    }
}

/// Records every step in order. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct TraceSink {
    pub steps: Vec<Step>,
}

impl TraceSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepSink for TraceSink {
    fn accept(&mut self, step: Step) {
        self.steps.push(step);
    }
}

/// Hands steps to a sink and paces playback.
#[derive(Debug)]
pub struct StepEmitter<S: StepSink> {
    sink: S,
    delay: DelayHandle,
}

impl<S: StepSink> StepEmitter<S> {
    pub fn new(sink: S, delay: DelayHandle) -> Self {
        Self { sink, delay }
    }

    /// Hand `step` to the sink, then suspend for the current delay.
    pub async fn emit(&mut self, step: Step) {
        debug!(
            algorithm = step.algorithm.name(),
            kind = step.kind.name(),
            highlights = step.highlights.len(),
            "step"
        );
        self.sink.accept(step);
        tokio::time::sleep(self.delay.current()).await;
    }

    /// Consume the emitter, returning the sink with whatever it collected.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Emitter paced by a zero delay, for tests and headless trace capture.
pub fn unpaced<S: StepSink>(sink: S) -> StepEmitter<S> {
    StepEmitter::new(sink, DelayHandle::new(Duration::ZERO))
}
