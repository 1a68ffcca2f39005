#![forbid(unsafe_code)]

//! Per-step highlight roles and the index-to-role map handed to renderers.
//!
//! Roles are a closed vocabulary rather than free-form strings so that every
//! call site composes highlights from the same small set and the styling
//! layer can match on them exhaustively.

/// Semantic role of one highlighted array index within a single step.
///
/// The wire tags returned by [`Role::tag`] are stable identifiers; any
/// external styling layer keys off them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Element taking part in a comparison.
    Comparing,
    /// Adjacent pair that was just exchanged (bubble's post-swap frame).
    Swapping,
    /// Element that was just exchanged into place (selection/quick swaps).
    Swap,
    /// Outer-loop position currently being filled.
    CurrentIndex,
    /// Smallest element found so far in the current scan.
    CurrentMinimum,
    /// The key value lifted out during insertion.
    Key,
    /// Element shifted one slot to the right.
    Shifting,
    /// Slot the key was just written into.
    Inserted,
    /// Pivot element of the active partition.
    Pivot,
    /// Pivot settled at its final position.
    PivotPlaced,
    /// Element inside the range currently being merged.
    InRange,
    /// Merge cursor: the slot about to receive (or just given) a value.
    WritePosition,
    /// Element in its final, sorted position.
    Sorted,
}

impl Role {
    /// Stable string tag for this role.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Comparing => "comparing",
            Self::Swapping => "swapping",
            Self::Swap => "swap",
            Self::CurrentIndex => "current-index",
            Self::CurrentMinimum => "current-minimum",
            Self::Key => "key",
            Self::Shifting => "shifting",
            Self::Inserted => "inserted",
            Self::Pivot => "pivot",
            Self::PivotPlaced => "pivot-placed",
            Self::InRange => "in-range",
            Self::WritePosition => "write-position",
            Self::Sorted => "sorted",
        }
    }
}

/// Mapping from array index to [`Role`] for one emitted step.
///
/// Built fresh per step and never mutated after being handed to a renderer.
/// Setting an index that is already present overwrites its role, so the last
/// writer wins; drivers rely on this when two roles land on the same index
/// (e.g. the current minimum coinciding with the current outer position).
/// Indices that are absent render in the default style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightMap {
    entries: Vec<(usize, Role)>,
}

impl HighlightMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map every index in `0..len` to the same role.
    pub fn all(len: usize, role: Role) -> Self {
        Self {
            entries: (0..len).map(|index| (index, role)).collect(),
        }
    }

    /// Assign `role` to `index`, replacing any previous role for that index.
    pub fn set(&mut self, index: usize, role: Role) {
        if let Some(entry) = self.entries.iter_mut().find(|(i, _)| *i == index) {
            entry.1 = role;
        } else {
            self.entries.push((index, role));
        }
    }

    /// Role assigned to `index`, if any.
    pub fn get(&self, index: usize) -> Option<Role> {
        self.entries
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, role)| *role)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over `(index, role)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Role)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut map = HighlightMap::new();
        map.set(3, Role::Comparing);
        map.set(4, Role::Comparing);
        assert_eq!(map.get(3), Some(Role::Comparing));
        assert_eq!(map.get(4), Some(Role::Comparing));
        assert_eq!(map.get(5), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn last_write_wins_on_collision() {
        let mut map = HighlightMap::new();
        map.set(0, Role::CurrentIndex);
        map.set(1, Role::Comparing);
        map.set(0, Role::CurrentMinimum);
        assert_eq!(map.get(0), Some(Role::CurrentMinimum));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn all_covers_every_index() {
        let map = HighlightMap::all(4, Role::Sorted);
        for index in 0..4 {
            assert_eq!(map.get(index), Some(Role::Sorted));
        }
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn tags_are_stable() {
        assert_eq!(Role::Comparing.tag(), "comparing");
        assert_eq!(Role::Swapping.tag(), "swapping");
        assert_eq!(Role::Swap.tag(), "swap");
        assert_eq!(Role::CurrentIndex.tag(), "current-index");
        assert_eq!(Role::CurrentMinimum.tag(), "current-minimum");
        assert_eq!(Role::PivotPlaced.tag(), "pivot-placed");
        assert_eq!(Role::WritePosition.tag(), "write-position");
        assert_eq!(Role::Sorted.tag(), "sorted");
    }
}
