#![forbid(unsafe_code)]

//! The sort-step animation engine.
//!
//! Five algorithm drivers (bubble, selection, insertion, merge, quick) walk
//! an array through their textbook compare/swap/shift/merge phases while
//! emitting a [`sortviz_core::Step`] after every semantically meaningful
//! mutation. Emission goes through the [`emitter::StepEmitter`], which hands
//! the step to a sink synchronously and then suspends for the current
//! playback delay, so the visual update and the pause are atomic from the
//! driver's perspective.

pub mod drivers;
pub mod emitter;
pub mod item;

pub use drivers::{SortRun, run_sort};
pub use emitter::{StepEmitter, StepSink, TraceSink, unpaced};
pub use item::SortItem;
