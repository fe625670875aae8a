//! Dictionary search for pattern-matching candidate words
//!
//! Scans the dictionary once per target, rating every word's tile pattern
//! against each requested pattern under each mode, and keeps the best-rated
//! candidates per round. The scan is chunked across threads; chunk results are
//! merged back in dictionary order, so the outcome is identical to a single
//! ordered pass and candidate lists keep first-seen order.

mod rank;

pub use rank::{ModeRanking, rank_modes};

use crate::core::{Pattern, Word};
use crate::mode::Mode;
use crate::rating::{RequestedPattern, pattern_match_rating};
use rayon::prelude::*;

/// Number of scoring rounds per board (one Wordle game)
pub const ROUNDS: usize = 6;

/// One board's worth of requested patterns, one per round
pub type PatternGroup = [RequestedPattern; ROUNDS];

/// Words per parallel work unit
const CHUNK_SIZE: usize = 1024;

/// Best candidates found for a single round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundSlot {
    /// Best rating seen so far (only ever increases during the scan)
    pub rating: u32,
    /// Words achieving that rating, in dictionary order
    pub candidates: Vec<String>,
}

/// Search results for one (pattern group, mode) pair across all rounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeResult {
    pub rounds: [RoundSlot; ROUNDS],
}

impl ModeResult {
    /// Sum of the best ratings over all rounds
    #[must_use]
    pub fn total_rating(&self) -> u32 {
        self.rounds.iter().map(|slot| slot.rating).sum()
    }
}

/// The complete outcome of one dictionary scan
///
/// Owns one [`ModeResult`] per (pattern group, mode) pair, plus the parsed
/// modes and the target word consumers need to reproduce candidate patterns.
#[derive(Debug, Clone)]
pub struct SearchResult {
    target: Word,
    modes: Vec<Mode>,
    // Indexed [pattern group][mode]
    per_pattern: Vec<Vec<ModeResult>>,
}

impl SearchResult {
    /// The target word the scan compared against
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// The modes in their original input order
    #[must_use]
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// Number of pattern groups searched
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.per_pattern.len()
    }

    /// The results for one (pattern group, mode) pair
    #[must_use]
    pub fn mode_result(&self, pattern: usize, mode: usize) -> Option<&ModeResult> {
        self.per_pattern.get(pattern)?.get(mode)
    }

    /// Position of a mode by its string form
    #[must_use]
    pub fn mode_index(&self, text: &str) -> Option<usize> {
        self.modes.iter().position(|m| m.to_string() == text)
    }

    fn empty(target: Word, modes: Vec<Mode>, pattern_count: usize) -> Self {
        let per_pattern = (0..pattern_count)
            .map(|_| vec![ModeResult::default(); modes.len()])
            .collect();
        Self {
            target,
            modes,
            per_pattern,
        }
    }
}

/// Scan the dictionary for the best-rated candidate words
///
/// Entries are trimmed and lowercased; anything that is not exactly 5 ASCII
/// letters is silently skipped. Each surviving word is compared to the target
/// once, then rated for every round, pattern group and mode. A strictly
/// higher rating replaces a round's candidates; an equal rating appends.
///
/// The exact target word is withheld from rounds 0-4 so the board never
/// "wins" before the final row; it may appear in round 5.
#[must_use]
pub fn find_words<S>(
    word_list: &[S],
    target: &Word,
    desired_patterns: &[PatternGroup],
    modes: &[Mode],
) -> SearchResult
where
    S: AsRef<str> + Sync,
{
    let mut result = SearchResult::empty(target.clone(), modes.to_vec(), desired_patterns.len());

    let partials: Vec<Vec<Vec<ModeResult>>> = word_list
        .par_chunks(CHUNK_SIZE)
        .map(|chunk| scan_chunk(chunk, target, desired_patterns, modes))
        .collect();

    // Merge in chunk order to reproduce the sequential scan exactly
    for partial in partials {
        merge(&mut result.per_pattern, partial);
    }

    result
}

/// Sequential scan of one dictionary chunk into a fresh accumulator
fn scan_chunk<S: AsRef<str>>(
    chunk: &[S],
    target: &Word,
    desired_patterns: &[PatternGroup],
    modes: &[Mode],
) -> Vec<Vec<ModeResult>> {
    let mut acc: Vec<Vec<ModeResult>> = (0..desired_patterns.len())
        .map(|_| vec![ModeResult::default(); modes.len()])
        .collect();

    for raw in chunk {
        // Malformed entries are skipped, never errors
        let Ok(word) = Word::new(raw.as_ref().trim()) else {
            continue;
        };

        let pattern = Pattern::calculate(&word, target);
        let is_target = word == *target;

        for round in 0..ROUNDS {
            // The exact target means winning the game; save it for the last row
            if is_target && round != ROUNDS - 1 {
                continue;
            }

            for (pattern_index, desired) in desired_patterns.iter().enumerate() {
                for (mode_index, mode) in modes.iter().enumerate() {
                    let rating = pattern_match_rating(pattern, &desired[round], mode);
                    let slot = &mut acc[pattern_index][mode_index].rounds[round];

                    if rating > slot.rating {
                        slot.rating = rating;
                        slot.candidates.clear();
                        slot.candidates.push(word.text().to_string());
                    } else if rating == slot.rating {
                        slot.candidates.push(word.text().to_string());
                    }
                }
            }
        }
    }

    acc
}

/// Fold a later chunk's accumulator into an earlier one
///
/// Max-then-append-on-tie per slot, preserving the earlier chunk's candidates
/// first. Associative over in-order chunks, so the merged result matches the
/// single-pass scan.
fn merge(acc: &mut [Vec<ModeResult>], partial: Vec<Vec<ModeResult>>) {
    for (acc_modes, partial_modes) in acc.iter_mut().zip(partial) {
        for (acc_result, partial_result) in acc_modes.iter_mut().zip(partial_modes) {
            for (slot, incoming) in acc_result.rounds.iter_mut().zip(partial_result.rounds) {
                if incoming.rating > slot.rating {
                    *slot = incoming;
                } else if incoming.rating == slot.rating {
                    slot.candidates.extend(incoming.candidates);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns_of(values: [u8; 5]) -> PatternGroup {
        let row = RequestedPattern::new(&values).unwrap();
        [row; ROUNDS]
    }

    fn modes_of(texts: &[&str]) -> Vec<Mode> {
        texts.iter().map(|t| Mode::parse(t).unwrap()).collect()
    }

    #[test]
    fn search_populates_every_slot() {
        let words = ["apple", "thick", "abide", "aback"];
        let target = Word::new("thick").unwrap();
        let desired = [patterns_of([0, 0, 0, 0, 0]), patterns_of([1, 1, 1, 1, 1])];
        let modes = modes_of(&["x/gy", "gy/x"]);

        let result = find_words(&words, &target, &desired, &modes);

        assert_eq!(result.pattern_count(), 2);
        assert_eq!(result.modes().len(), 2);
        for pattern in 0..2 {
            for mode in 0..2 {
                let mode_result = result.mode_result(pattern, mode).unwrap();
                for slot in &mode_result.rounds {
                    assert!(
                        !slot.candidates.is_empty(),
                        "round left unpopulated for pattern {pattern} mode {mode}"
                    );
                }
            }
        }
    }

    #[test]
    fn search_excludes_target_before_final_round() {
        let words = ["apple", "thick", "abide", "aback"];
        let target = Word::new("thick").unwrap();
        // All-green request under gy/x maximizes the target's own rating
        let desired = [patterns_of([0, 0, 0, 0, 0])];
        let modes = modes_of(&["gy/x"]);

        let result = find_words(&words, &target, &desired, &modes);
        let mode_result = result.mode_result(0, 0).unwrap();

        for slot in &mode_result.rounds[..ROUNDS - 1] {
            assert!(!slot.candidates.contains(&"thick".to_string()));
        }
        assert!(mode_result.rounds[ROUNDS - 1]
            .candidates
            .contains(&"thick".to_string()));
    }

    #[test]
    fn search_ties_keep_dictionary_order() {
        // All four words are all-gray against the target, so they tie
        let words = ["bonus", "dodge", "mummy", "puree"];
        let target = Word::new("thick").unwrap();
        let desired = [patterns_of([0, 0, 0, 0, 0])];
        let modes = modes_of(&["x/gy"]);

        let result = find_words(&words, &target, &desired, &modes);
        let slot = &result.mode_result(0, 0).unwrap().rounds[0];

        assert_eq!(slot.candidates, ["bonus", "dodge", "mummy", "puree"]);
    }

    #[test]
    fn search_strictly_better_replaces() {
        // Under gy/x an all-zero request wants green/yellow everywhere, so
        // "thing" (t-h-i in place against "thick") evicts the earlier all-gray
        // "bonus" despite arriving later.
        let words = ["bonus", "thing"];
        let target = Word::new("thick").unwrap();
        let desired = [patterns_of([0, 0, 0, 0, 0])];
        let modes = modes_of(&["gy/x"]);

        let result = find_words(&words, &target, &desired, &modes);
        let slot = &result.mode_result(0, 0).unwrap().rounds[0];

        assert_eq!(slot.candidates, ["thing"]);
        // t, h, i green (offset 0 in "gy"): 3 matches * 10 + 3 * 2
        assert_eq!(slot.rating, 36);
    }

    #[test]
    fn search_skips_malformed_entries() {
        let words = ["  apple  ", "", "toolong", "ab1de", "THICK"];
        let target = Word::new("aback").unwrap();
        let desired = [patterns_of([0, 0, 0, 0, 0])];
        let modes = modes_of(&["x/gy"]);

        let result = find_words(&words, &target, &desired, &modes);
        let slot = &result.mode_result(0, 0).unwrap().rounds[0];

        // Only the trimmed "apple" and normalized "thick" survive the filter
        for candidate in &slot.candidates {
            assert!(["apple", "thick"].contains(&candidate.as_str()));
        }
        assert!(!slot.candidates.is_empty());
    }

    #[test]
    fn search_multichunk_matches_single_pass() {
        // Enough words to span several parallel chunks, with the target
        // dropped into the middle so the exclusion rule crosses a boundary too
        let mut words = Vec::new();
        for c1 in b'a'..=b'z' {
            for c2 in b'a'..=b'z' {
                for c3 in [b'a', b'e', b'i', b'o'] {
                    words.push(String::from_utf8(vec![c1, c2, c3, b'k', b's']).unwrap());
                }
            }
        }
        words.insert(CHUNK_SIZE + CHUNK_SIZE / 2, "thick".to_string());
        assert!(words.len() > 2 * CHUNK_SIZE);

        let target = Word::new("thick").unwrap();
        let desired = [patterns_of([1, 1, 1, 0, 0]), patterns_of([0, 1, 0, 1, 0])];
        let modes = modes_of(&["gy/x", "x/gy", "y/g/x"]);

        let parallel = find_words(&words, &target, &desired, &modes);
        let sequential = scan_chunk(&words, &target, &desired, &modes);

        // Slot-for-slot: same ratings and the same candidate order
        for pattern in 0..desired.len() {
            for mode in 0..modes.len() {
                assert_eq!(
                    parallel.mode_result(pattern, mode).unwrap(),
                    &sequential[pattern][mode]
                );
            }
        }
    }

    #[test]
    fn merge_prefers_higher_rating_and_appends_ties() {
        let mut acc = vec![vec![ModeResult::default()]];
        acc[0][0].rounds[0] = RoundSlot {
            rating: 20,
            candidates: vec!["early".to_string()],
        };
        acc[0][0].rounds[1] = RoundSlot {
            rating: 10,
            candidates: vec!["early".to_string()],
        };

        let mut partial = vec![vec![ModeResult::default()]];
        partial[0][0].rounds[0] = RoundSlot {
            rating: 20,
            candidates: vec!["later".to_string()],
        };
        partial[0][0].rounds[1] = RoundSlot {
            rating: 30,
            candidates: vec!["later".to_string()],
        };

        merge(&mut acc, partial);

        assert_eq!(acc[0][0].rounds[0].candidates, ["early", "later"]);
        assert_eq!(acc[0][0].rounds[1].rating, 30);
        assert_eq!(acc[0][0].rounds[1].candidates, ["later"]);
    }
}
