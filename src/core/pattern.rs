//! Wordle feedback pattern calculation and representation
//!
//! A pattern records the tile coloring a guess would receive against a target:
//! - Gray: letter not in the word
//! - Yellow: letter in the word, wrong position
//! - Green: letter in the correct position

use super::Word;
use std::fmt;

/// A single tile color
///
/// The ordinal values (gray=0, yellow=1, green=2) are used to index
/// per-color tables in mode lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Gray = 0,
    Yellow = 1,
    Green = 2,
}

impl Color {
    /// All colors in ordinal order
    pub const ALL: [Self; 3] = [Self::Gray, Self::Yellow, Self::Green];

    /// Ordinal value (0 for gray, 1 for yellow, 2 for green)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The single-character token used in mode strings
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Gray => 'x',
            Self::Yellow => 'y',
            Self::Green => 'g',
        }
    }

    /// Parse a mode-string token ('x', 'y' or 'g')
    #[must_use]
    pub const fn from_token(ch: char) -> Option<Self> {
        match ch {
            'x' => Some(Self::Gray),
            'y' => Some(Self::Yellow),
            'g' => Some(Self::Green),
            _ => None,
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Five tiles, one per letter position. Produced only by [`Pattern::calculate`]
/// (or constructed directly from tiles) and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Color; 5]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Color::Green; 5]);

    /// Create a pattern from explicit tiles
    #[inline]
    #[must_use]
    pub const fn new(tiles: [Color; 5]) -> Self {
        Self(tiles)
    }

    /// Get the tiles in position order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Color; 5] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    ///
    /// The two-pass order prevents a target letter from being counted twice: a
    /// letter consumed by a green can never also satisfy a yellow elsewhere.
    ///
    /// # Examples
    /// ```
    /// use wordraw::core::{Color, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(
    ///     pattern.tiles(),
    ///     &[Color::Gray, Color::Gray, Color::Green, Color::Gray, Color::Green]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut tiles = [Color::Gray; 5];
        let mut answer_available = answer.char_counts();

        // First pass: Mark greens (exact position matches)
        // Allow: Index needed to access guess[i], answer[i], and set tiles[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == answer.chars()[i] {
                tiles[i] = Color::Green;

                // Remove from available pool
                let letter = guess.chars()[i];
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Mark yellows (wrong position, but letter exists)
        // Allow: Index needed to access guess[i] and check/set tiles[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if tiles[i] == Color::Gray {
                let letter = guess.chars()[i];
                if let Some(count) = answer_available.get_mut(&letter)
                    && *count > 0
                {
                    tiles[i] = Color::Yellow;
                    *count -= 1;
                }
            }
        }

        Self(tiles)
    }

}

impl fmt::Display for Pattern {
    /// Format using mode-string tokens, e.g. "gxxyx"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.0 {
            write!(f, "{}", tile.token())?;
        }
        Ok(())
    }
}
