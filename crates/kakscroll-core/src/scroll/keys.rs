//! Keystroke payload for one scroll tick.
//!
//! A tick presses the movement key `lines` times, then the matching
//! visual-extend variant `lines` times. The extend group collapses the
//! selection the movement left behind, so the viewport scrolls without a
//! lingering selection artifact.

use super::plan::Direction;

/// Key sequence scrolling `lines` lines in `direction`.
pub fn tick_keys(direction: Direction, lines: u32) -> String {
    match direction {
        Direction::Down => format!("{lines}j{lines}vj"),
        Direction::Up => format!("{lines}k{lines}vk"),
    }
}
