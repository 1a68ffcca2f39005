#![forbid(unsafe_code)]

//! Session-level error types.

use crate::array::{MAX_SIZE, MIN_SIZE};

/// Errors raised when a UI request conflicts with the session state.
///
/// None of these are fatal; each surfaces as a user-visible message while
/// the animation subsystem keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A sort is already running; the request is rejected, not queued.
    SortInProgress,
    /// Requested array size is outside the supported range.
    SizeOutOfRange { requested: usize },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SortInProgress => write!(f, "sorting is already in progress"),
            Self::SizeOutOfRange { requested } => write!(
                f,
                "array size {requested} is outside the supported range {MIN_SIZE}..={MAX_SIZE}"
            ),
        }
    }
}

impl std::error::Error for SessionError {}
