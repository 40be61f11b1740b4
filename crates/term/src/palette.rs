//! Color classes used by the renderer.
//!
//! The simulator only needs the three classic ANSI classes plus reset, so the
//! palette maps onto crossterm's dark (non-bright) colors: `31`, `32` and `33`.

use crossterm::style::Color;

use crate::types::StressTier;

/// Faults, high stress, earthquake banner
pub const ALERT: Color = Color::DarkRed;

/// Low stress
pub const SUCCESS: Color = Color::DarkGreen;

/// Mid stress, input notices
pub const WARNING: Color = Color::DarkYellow;

/// Color of a stress tier
pub fn tier_color(tier: StressTier) -> Color {
    match tier {
        StressTier::Low => SUCCESS,
        StressTier::Mid => WARNING,
        StressTier::High => ALERT,
    }
}
