//! Formatting utilities for terminal output

use crate::core::{Color, Pattern};
use crate::mode::Mode;
use crate::rating::RequestedPattern;

/// Emoji tile for a color
#[must_use]
pub const fn color_emoji(color: Color) -> char {
    match color {
        Color::Gray => '⬜',
        Color::Yellow => '🟨',
        Color::Green => '🟩',
    }
}

/// Single-letter form of a color
#[must_use]
pub const fn color_letter(color: Color) -> char {
    match color {
        Color::Gray => 'X',
        Color::Yellow => 'Y',
        Color::Green => 'G',
    }
}

/// Format a computed pattern as a row of emoji tiles
#[must_use]
pub fn pattern_tiles(pattern: Pattern) -> String {
    pattern.tiles().iter().map(|&c| color_emoji(c)).collect()
}

/// Format a computed pattern as its letter form, e.g. "GYXXX"
#[must_use]
pub fn pattern_letters(pattern: Pattern) -> String {
    pattern.tiles().iter().map(|&c| color_letter(c)).collect()
}

/// Format a requested pattern as emoji tiles under a mode
///
/// Each group index is shown as the first color of that group; a group the
/// mode does not define renders gray.
#[must_use]
pub fn requested_tiles(requested: &RequestedPattern, mode: &Mode) -> String {
    requested
        .groups()
        .iter()
        .map(|&g| color_emoji(mode.representative(usize::from(g)).unwrap_or(Color::Gray)))
        .collect()
}
