#![forbid(unsafe_code)]

//! Terminal rendering for array snapshots.
//!
//! A pure projection of `(snapshot, highlight map)` onto a rectangle of
//! terminal cells: vertical bars with partial-block tops, a value label row,
//! and one color per highlight role. Every index in `0..len` is drawn even
//! when the highlight map is empty.

pub mod bar_chart;
pub mod palette;

pub use bar_chart::{BarChart, Rect};
pub use palette::role_color;
