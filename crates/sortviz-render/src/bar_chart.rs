#![forbid(unsafe_code)]

//! The bar chart itself: one vertical bar per array index.
//!
//! Bars grow bottom-up inside the target rectangle with eighth-block
//! characters for the fractional top cell; the bottom row carries the value
//! labels. Indices absent from the highlight map draw in the default style.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use tracing::trace;

use sortviz_core::array::VALUE_CEILING;
use sortviz_core::highlight::HighlightMap;

use crate::palette::{DEFAULT_BAR, role_color};

/// Bar characters for vertical rendering (9 levels: empty through full).
const BAR_CHARS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A rectangle of terminal cells, in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Renders array snapshots as a vertical bar chart.
#[derive(Debug, Clone)]
pub struct BarChart {
    bar_width: u16,
    bar_gap: u16,
    value_ceiling: u32,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            bar_width: 2,
            bar_gap: 1,
            value_ceiling: VALUE_CEILING,
        }
    }
}

impl BarChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bar_width(mut self, width: u16) -> Self {
        self.bar_width = width.max(1);
        self
    }

    pub fn bar_gap(mut self, gap: u16) -> Self {
        self.bar_gap = gap;
        self
    }

    /// Columns needed to show `len` bars.
    fn content_width(&self, len: usize) -> u16 {
        if len == 0 {
            return 0;
        }
        let len = len as u16;
        len * self.bar_width + (len - 1) * self.bar_gap
    }

    /// Draw `snapshot` into `area`, coloring each index by its highlight
    /// role. Queues the cells on `out` and flushes once at the end.
    pub fn draw<W: Write>(
        &self,
        out: &mut W,
        area: Rect,
        snapshot: &[u32],
        highlights: &HighlightMap,
    ) -> io::Result<()> {
        if area.is_empty() || snapshot.is_empty() {
            return Ok(());
        }
        trace!(
            len = snapshot.len(),
            highlights = highlights.len(),
            "drawing snapshot"
        );

        // Reserve one row at the bottom for value labels.
        let chart_height = area.height.saturating_sub(1);
        if chart_height == 0 {
            return Ok(());
        }
        let label_y = area.bottom() - 1;
        let base_y = label_y - 1;

        let content = self.content_width(snapshot.len());
        let left = area.x + area.width.saturating_sub(content) / 2;

        self.clear(out, area)?;

        for (index, &value) in snapshot.iter().enumerate() {
            let bar_x = left + index as u16 * (self.bar_width + self.bar_gap);
            if bar_x + self.bar_width > area.right() {
                break;
            }

            let color = highlights
                .get(index)
                .map(role_color)
                .unwrap_or(DEFAULT_BAR);
            queue!(out, SetForegroundColor(color))?;

            // Scale into eighth-block resolution.
            let eighths = (u64::from(value) * u64::from(chart_height) * 8
                / u64::from(self.value_ceiling.max(1))) as u16;
            let full = eighths / 8;
            let frac = (eighths % 8) as usize;

            for row in 0..full {
                let y = base_y - row;
                if y < area.y {
                    break;
                }
                self.bar_row(out, bar_x, y, BAR_CHARS[8])?;
            }
            if frac > 0 {
                let y = base_y.saturating_sub(full);
                if y >= area.y {
                    self.bar_row(out, bar_x, y, BAR_CHARS[frac])?;
                }
            }

            // Value label under the bar.
            let label = format!("{value:>width$}", width = self.bar_width as usize);
            queue!(out, MoveTo(bar_x, label_y), Print(label))?;
        }

        queue!(out, ResetColor)?;
        out.flush()
    }

    fn bar_row<W: Write>(&self, out: &mut W, x: u16, y: u16, glyph: char) -> io::Result<()> {
        queue!(out, MoveTo(x, y))?;
        for _ in 0..self.bar_width {
            queue!(out, Print(glyph))?;
        }
        Ok(())
    }

    fn clear<W: Write>(&self, out: &mut W, area: Rect) -> io::Result<()> {
        let blank = " ".repeat(area.width as usize);
        for y in area.y..area.bottom() {
            queue!(out, MoveTo(area.x, y), Print(&blank))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::highlight::Role;

    fn area() -> Rect {
        Rect::new(0, 0, 40, 12)
    }

    #[test]
    fn draws_every_index_with_an_empty_highlight_map() {
        let chart = BarChart::new();
        let mut out = Vec::new();
        chart
            .draw(&mut out, area(), &[5, 3, 8, 99], &HighlightMap::new())
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        // Full blocks for the tall bar and every value label present.
        assert!(text.contains('█'));
        for label in ["5", "3", "8", "99"] {
            assert!(text.contains(label), "missing label {label}");
        }
    }

    #[test]
    fn highlighted_bars_change_color() {
        let chart = BarChart::new();
        let mut plain = Vec::new();
        let mut highlighted = Vec::new();
        let mut map = HighlightMap::new();
        map.set(0, Role::Comparing);

        chart
            .draw(&mut plain, area(), &[50, 50], &HighlightMap::new())
            .unwrap();
        chart.draw(&mut highlighted, area(), &[50, 50], &map).unwrap();
        assert_ne!(plain, highlighted);
    }

    #[test]
    fn empty_area_and_empty_snapshot_are_no_ops() {
        let chart = BarChart::new();
        let mut out = Vec::new();
        chart
            .draw(&mut out, Rect::new(0, 0, 0, 0), &[1], &HighlightMap::new())
            .unwrap();
        chart
            .draw(&mut out, area(), &[], &HighlightMap::new())
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn zero_value_draws_no_blocks_but_keeps_its_label() {
        let chart = BarChart::new();
        let mut out = Vec::new();
        chart
            .draw(&mut out, area(), &[0], &HighlightMap::new())
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('█'));
        assert!(text.contains('0'));
    }

    #[test]
    fn content_width_matches_bar_geometry() {
        let chart = BarChart::new().bar_width(2).bar_gap(1);
        assert_eq!(chart.content_width(4), 11);
        assert_eq!(chart.content_width(1), 2);
        assert_eq!(chart.content_width(0), 0);
    }
}
