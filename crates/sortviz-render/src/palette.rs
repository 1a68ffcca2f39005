#![forbid(unsafe_code)]

//! Role-to-color mapping.
//!
//! One color per highlight role, chosen to keep the distinct-role-per-index
//! semantics readable: warm colors for attention (comparison, movement),
//! green for settled values, blue for the final sorted state.

use crossterm::style::Color;
use sortviz_core::highlight::Role;

const ORANGE: Color = Color::Rgb {
    r: 255,
    g: 165,
    b: 0,
};

/// Color used for indices with no highlight role.
pub const DEFAULT_BAR: Color = Color::White;

pub const fn role_color(role: Role) -> Color {
    match role {
        Role::Comparing => Color::Yellow,
        Role::Swapping => Color::Green,
        Role::Swap => Color::Red,
        Role::CurrentIndex => ORANGE,
        Role::CurrentMinimum => Color::Green,
        Role::Key => ORANGE,
        Role::Shifting => Color::Red,
        Role::Inserted => Color::Green,
        Role::Pivot => ORANGE,
        Role::PivotPlaced => Color::Green,
        Role::InRange => ORANGE,
        Role::WritePosition => Color::Green,
        Role::Sorted => Color::Blue,
    }
}
