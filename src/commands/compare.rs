//! Word comparison command
//!
//! Computes the tile pattern one guess would receive against a target.

use crate::core::{Pattern, Word};

/// Result of comparing a guess to a target
pub struct CompareResult {
    pub guess: Word,
    pub target: Word,
    pub pattern: Pattern,
}

/// Compare a guess and a target word
///
/// # Errors
///
/// Returns an error if either word is invalid (not 5 ASCII letters).
pub fn compare_pair(guess: &str, target: &str) -> Result<CompareResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;
    let pattern = Pattern::calculate(&guess, &target);

    Ok(CompareResult {
        guess,
        target,
        pattern,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn compare_valid_pair() {
        let result = compare_pair("crazy", "cigar").unwrap();
        assert_eq!(result.guess.text(), "crazy");
        assert_eq!(result.pattern.tiles()[0], Color::Green);
    }

    #[test]
    fn compare_normalizes_case() {
        let result = compare_pair("APPLE", "apple").unwrap();
        assert!(result.pattern.is_perfect());
    }

    #[test]
    fn compare_invalid_guess() {
        assert!(compare_pair("toolong", "apple").is_err());
        assert!(compare_pair("appl", "apple").is_err());
    }

    #[test]
    fn compare_invalid_target() {
        assert!(compare_pair("apple", "ap ple").is_err());
    }
}
