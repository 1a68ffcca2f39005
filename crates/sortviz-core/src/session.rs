#![forbid(unsafe_code)]

//! The sort session: array, pacing delay, narration switch, and the
//! mutual-exclusion flag guarding concurrent runs.
//!
//! The sorting flag is only reachable through [`SortingFlag::try_acquire`],
//! which returns an RAII [`SortPermit`]. Dropping the permit clears the
//! flag, so it is released on every exit path, including a driver task that
//! faults mid-run.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tracing::{debug, warn};

use crate::array::ArrayState;
use crate::error::SessionError;

/// Shared playback delay, read fresh at every emitted step.
///
/// Stored as whole milliseconds; an in-flight animation picks up changes on
/// its next step.
#[derive(Debug, Clone)]
pub struct DelayHandle {
    millis: Arc<AtomicU64>,
}

impl DelayHandle {
    pub fn new(delay: Duration) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(delay.as_millis() as u64)),
        }
    }

    pub fn current(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::Relaxed))
    }

    pub fn set(&self, delay: Duration) {
        self.millis
            .store(delay.as_millis() as u64, Ordering::Relaxed);
    }
}

/// Shared on/off switch for narration requests.
#[derive(Debug, Clone)]
pub struct NarrationToggle {
    enabled: Arc<AtomicBool>,
}

impl NarrationToggle {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set(&self, on: bool) {
        self.enabled.store(on, Ordering::Relaxed);
    }

    /// Flip the switch and return the new state.
    pub fn toggle(&self) -> bool {
        !self.enabled.fetch_not(Ordering::Relaxed)
    }
}

/// Mutual-exclusion flag: at most one driver holds it at a time.
#[derive(Debug, Clone, Default)]
pub struct SortingFlag {
    held: Arc<AtomicBool>,
}

impl SortingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }

    /// Acquire the flag, or `None` if a sort is already running.
    pub fn try_acquire(&self) -> Option<SortPermit> {
        if self
            .held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            debug!("sorting flag acquired");
            Some(SortPermit {
                held: Arc::clone(&self.held),
            })
        } else {
            None
        }
    }
}

/// RAII witness that the sorting flag is held.
///
/// The flag clears when this drops, whether the driver finished or the task
/// carrying it was torn down.
#[derive(Debug)]
pub struct SortPermit {
    held: Arc<AtomicBool>,
}

impl Drop for SortPermit {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
        debug!("sorting flag released");
    }
}

/// One visualization session: the array, the pacing delay, the narration
/// switch, and the sorting flag.
#[derive(Debug)]
pub struct SortSession {
    array: ArrayState,
    delay: DelayHandle,
    narration: NarrationToggle,
    flag: SortingFlag,
}

impl SortSession {
    pub fn new(array: ArrayState, delay: Duration, narrate: bool) -> Self {
        Self {
            array,
            delay: DelayHandle::new(delay),
            narration: NarrationToggle::new(narrate),
            flag: SortingFlag::new(),
        }
    }

    pub fn values(&self) -> &[u32] {
        self.array.values()
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn is_sorting(&self) -> bool {
        self.flag.is_held()
    }

    /// Handle for reading the delay from a running driver.
    pub fn delay(&self) -> DelayHandle {
        self.delay.clone()
    }

    /// Handle for the narration switch.
    pub fn narration(&self) -> NarrationToggle {
        self.narration.clone()
    }

    /// Change the playback delay. Rejected while a sort is running.
    pub fn set_delay(&mut self, delay: Duration) -> Result<(), SessionError> {
        if self.flag.is_held() {
            warn!("delay change rejected: sort in progress");
            return Err(SessionError::SortInProgress);
        }
        self.delay.set(delay);
        Ok(())
    }

    /// Replace the array with freshly generated values. Rejected while a
    /// sort is running; an invalid size leaves the array untouched.
    pub fn regenerate(
        &mut self,
        size: usize,
        fill: impl FnMut() -> u32,
    ) -> Result<(), SessionError> {
        if self.flag.is_held() {
            warn!("regenerate rejected: sort in progress");
            return Err(SessionError::SortInProgress);
        }
        self.array.regenerate(size, fill)
    }

    /// Begin a sort run: acquire the flag and hand out a working copy of
    /// the values. The session keeps its own copy until [`Self::finish`].
    pub fn try_begin(&self) -> Result<(SortPermit, Vec<u32>), SessionError> {
        let permit = self.flag.try_acquire().ok_or_else(|| {
            warn!("sort request rejected: sort in progress");
            SessionError::SortInProgress
        })?;
        Ok((permit, self.array.to_vec()))
    }

    /// Record the outcome of a finished run.
    pub fn finish(&mut self, sorted: Vec<u32>) {
        self.array.restore(sorted);
    }
}
