#![forbid(unsafe_code)]

//! Insertion sort driver.
//!
//! Each outer element becomes the key and gets its own frame; the shift
//! scan moves strictly-greater values one slot right with a frame per
//! shift, and the landing write gets an inserted frame. The shift frame
//! marks the compare source, the destination, and the key column; the key
//! role wins when the destination is still the key's own slot.

use sortviz_core::highlight::{HighlightMap, Role};
use sortviz_core::step::StepKind;

use crate::emitter::StepSink;
use crate::item::SortItem;

use super::SortRun;

pub(super) async fn drive<S: StepSink, T: SortItem>(run: &mut SortRun<S, T>) {
    let n = run.len();
    for i in 1..n {
        let key_item = run.items[i];
        let key = key_item.key();

        let mut highlights = HighlightMap::new();
        highlights.set(i, Role::Key);
        run.step(
            StepKind::KeySelect,
            highlights,
            format!("Selected the value {key} at position {i} as the key."),
        )
        .await;

        // `slot` is the hole the key could drop into; the value under
        // inspection sits at `slot - 1`.
        let mut slot = i;
        while slot > 0 && run.key(slot - 1) > key {
            let shifted = run.key(slot - 1);
            run.items[slot] = run.items[slot - 1];

            let mut highlights = HighlightMap::new();
            highlights.set(slot - 1, Role::Comparing);
            highlights.set(slot, Role::Shifting);
            highlights.set(i, Role::Key);
            run.step(
                StepKind::Shift,
                highlights,
                format!("Shifted {shifted} one position right because it is greater than {key}."),
            )
            .await;

            slot -= 1;
        }

        run.items[slot] = key_item;
        let mut highlights = HighlightMap::new();
        highlights.set(slot, Role::Inserted);
        run.step(
            StepKind::Insert,
            highlights,
            format!("Inserted the key {key} at position {slot}."),
        )
        .await;
    }
}
