#![forbid(unsafe_code)]

//! Element abstraction for the drivers.
//!
//! Drivers compare and snapshot elements exclusively through [`SortItem`],
//! so equal keys are genuinely indistinguishable to the algorithms. The
//! production element is a bare `u32`; tests instantiate tagged values to
//! observe stability.

/// An element the drivers can sort.
pub trait SortItem: Copy {
    /// Comparison key; also the bar height shown in snapshots.
    fn key(&self) -> u32;
}

impl SortItem for u32 {
    fn key(&self) -> u32 {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_is_its_own_key() {
        assert_eq!(42u32.key(), 42);
    }
}
