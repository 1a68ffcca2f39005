#![forbid(unsafe_code)]

//! Core data model for the sortviz animation engine.
//!
//! This crate owns everything the algorithm drivers, the renderer, and the
//! narration client agree on: the array under sort, the session that guards
//! it, the per-step highlight vocabulary, and the step records emitted while
//! an animation runs. It deliberately contains no terminal, timing, or
//! network code.

pub mod array;
pub mod error;
pub mod highlight;
pub mod session;
pub mod step;

pub use array::ArrayState;
pub use error::SessionError;
pub use highlight::{HighlightMap, Role};
pub use session::{DelayHandle, NarrationToggle, SortPermit, SortSession, SortingFlag};
pub use step::{Algorithm, Step, StepDescriptor, StepKind};
