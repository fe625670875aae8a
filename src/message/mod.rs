//! Message rendering into requested patterns
//!
//! Turns a text message into one pattern group per character using the
//! built-in 6x5 font. The search never sees text; it only receives the
//! resolved group-index patterns produced here.

pub mod font;

use crate::rating::RequestedPattern;
use crate::search::PatternGroup;
use font::Glyph;

/// Convert a glyph's rows into a pattern group
fn glyph_to_patterns(glyph: &Glyph) -> PatternGroup {
    glyph.map(|row| {
        // Font cells are 0/1 by construction
        RequestedPattern::new(&row).expect("font rows are valid requested patterns")
    })
}

/// Render a message as one pattern group per character
///
/// Characters the font does not cover fall back to the `?` glyph, so the
/// output always has one group per input character.
///
/// # Examples
/// ```
/// use wordraw::message::string_to_patterns;
///
/// let patterns = string_to_patterns("hi");
/// assert_eq!(patterns.len(), 2);
/// ```
#[must_use]
pub fn string_to_patterns(message: &str) -> Vec<PatternGroup> {
    message
        .chars()
        .map(|ch| glyph_to_patterns(font::glyph(ch).unwrap_or(&font::FALLBACK)))
        .collect()
}

/// The default board when no message is given: a single heart
#[must_use]
pub fn heart_pattern() -> PatternGroup {
    glyph_to_patterns(&font::HEART)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_yields_one_group_per_char() {
        let patterns = string_to_patterns("hello");
        assert_eq!(patterns.len(), 5);
    }

    #[test]
    fn unknown_chars_use_fallback() {
        let patterns = string_to_patterns("#");
        let fallback = glyph_to_patterns(&font::FALLBACK);
        assert_eq!(patterns[0], fallback);
    }

    #[test]
    fn glyph_rows_map_to_requested_patterns() {
        let patterns = string_to_patterns("t");
        // Top row of 'T' is a full stroke
        assert_eq!(patterns[0][0].groups(), &[1, 1, 1, 1, 1]);
        // Second row is the stem
        assert_eq!(patterns[0][1].groups(), &[0, 0, 1, 0, 0]);
    }

    #[test]
    fn heart_pattern_shape() {
        let heart = heart_pattern();
        assert_eq!(heart[0].groups(), &[0, 1, 0, 1, 0]);
        assert_eq!(heart[1].groups(), &[1, 1, 1, 1, 1]);
        assert_eq!(heart[5].groups(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn case_folds_to_same_patterns() {
        assert_eq!(string_to_patterns("WORD"), string_to_patterns("word"));
    }
}
