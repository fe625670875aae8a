//! Word lists for the dictionary scan
//!
//! Provides an embedded word list compiled into the binary plus a file loader.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        // All embedded words should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_include_demo_targets() {
        for target in ["thick", "apple", "aback", "abide"] {
            assert!(WORDS.contains(&target), "'{target}' missing from word list");
        }
    }
}
