#![forbid(unsafe_code)]

//! Step records emitted by the algorithm drivers.
//!
//! A [`Step`] is one atomic highlight-and-pause unit: the full array
//! snapshot, the highlight map for the renderer, and the metadata the
//! narration layer needs. Steps are immutable once constructed.

use crate::highlight::HighlightMap;

/// The five supported sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
    ];

    /// Lower-case identifier used in prompts and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }

    /// Human-facing label for the UI.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What kind of event a step describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Two values were compared.
    Compare,
    /// Two values were exchanged.
    Swap,
    /// An outer pass started at a new position.
    PassStart,
    /// The scan found a new smallest value.
    NewMinimum,
    /// A key value was lifted out for insertion.
    KeySelect,
    /// A value was shifted one slot to the right.
    Shift,
    /// The key was written into its slot.
    Insert,
    /// A value was merged into the working range.
    MergeWrite,
    /// The pivot reached its final position.
    PivotPlace,
    /// The array is fully sorted.
    Finished,
}

impl StepKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::PassStart => "pass-start",
            Self::NewMinimum => "new-minimum",
            Self::KeySelect => "key-select",
            Self::Shift => "shift",
            Self::Insert => "insert",
            Self::MergeWrite => "merge-write",
            Self::PivotPlace => "pivot-place",
            Self::Finished => "finished",
        }
    }
}

/// One emitted highlight-and-pause unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub algorithm: Algorithm,
    pub kind: StepKind,
    /// Full array snapshot at emit time.
    pub snapshot: Vec<u32>,
    pub highlights: HighlightMap,
    /// One free-text sentence of context for the narration layer.
    pub context: String,
}

impl Step {
    /// The narration view of this step.
    pub fn descriptor(&self) -> StepDescriptor {
        StepDescriptor {
            algorithm: self.algorithm,
            kind: self.kind,
            snapshot: self.snapshot.clone(),
            context: self.context.clone(),
        }
    }
}

/// Immutable record handed to the explanation requester, one per narrated
/// event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDescriptor {
    pub algorithm: Algorithm,
    pub kind: StepKind,
    pub snapshot: Vec<u32>,
    pub context: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::Role;

    #[test]
    fn algorithm_names() {
        assert_eq!(Algorithm::Bubble.name(), "bubble");
        assert_eq!(Algorithm::Quick.label(), "Quick Sort");
        assert_eq!(Algorithm::ALL.len(), 5);
    }

    #[test]
    fn descriptor_carries_step_fields() {
        let mut highlights = HighlightMap::new();
        highlights.set(0, Role::Comparing);
        let step = Step {
            algorithm: Algorithm::Merge,
            kind: StepKind::MergeWrite,
            snapshot: vec![3, 1, 2],
            highlights,
            context: "Writing 1 into position 0.".to_string(),
        };
        let descriptor = step.descriptor();
        assert_eq!(descriptor.algorithm, Algorithm::Merge);
        assert_eq!(descriptor.kind, StepKind::MergeWrite);
        assert_eq!(descriptor.snapshot, vec![3, 1, 2]);
        assert_eq!(descriptor.context, step.context);
    }
}
