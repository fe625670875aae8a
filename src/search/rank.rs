//! Ranking of modes by total rating
//!
//! After a scan, each mode's ratings are summed over every pattern group and
//! round; modes are then ordered best-first. Ties keep the modes' original
//! input order.

use super::SearchResult;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Modes ordered by how well the dictionary could reproduce the requested
/// patterns under each of them
#[derive(Debug, Clone)]
pub struct ModeRanking {
    /// Mode strings, best total first
    pub ordered: Vec<String>,
    /// Total rating per mode string
    pub totals: FxHashMap<String, u32>,
}

impl ModeRanking {
    /// Total rating for a mode, 0 if unknown
    #[must_use]
    pub fn total(&self, mode: &str) -> u32 {
        self.totals.get(mode).copied().unwrap_or(0)
    }
}

/// Order modes by descending total rating across all pattern groups and rounds
///
/// # Examples
/// ```
/// use wordraw::core::Word;
/// use wordraw::mode::Mode;
/// use wordraw::rating::RequestedPattern;
/// use wordraw::search::{find_words, rank_modes};
///
/// let words = ["apple", "abide", "aback"];
/// let target = Word::new("thick").unwrap();
/// let row = RequestedPattern::new(&[0, 0, 0, 0, 0]).unwrap();
/// let modes = vec![Mode::parse("x/gy").unwrap(), Mode::parse("gy/x").unwrap()];
///
/// let result = find_words(&words, &target, &[[row; 6]], &modes);
/// let ranking = rank_modes(&result);
/// assert_eq!(ranking.ordered.len(), 2);
/// ```
#[must_use]
pub fn rank_modes(result: &SearchResult) -> ModeRanking {
    let mode_count = result.modes().len();
    let mut totals_by_index = vec![0u32; mode_count];

    for pattern in 0..result.pattern_count() {
        for (mode_index, total) in totals_by_index.iter_mut().enumerate() {
            if let Some(mode_result) = result.mode_result(pattern, mode_index) {
                *total += mode_result.total_rating();
            }
        }
    }

    // Stable sort keeps input order among equal totals
    let mut order: Vec<usize> = (0..mode_count).collect();
    order.sort_by_key(|&i| Reverse(totals_by_index[i]));

    let ordered = order
        .iter()
        .map(|&i| result.modes()[i].to_string())
        .collect();
    let totals = result
        .modes()
        .iter()
        .zip(&totals_by_index)
        .map(|(mode, &total)| (mode.to_string(), total))
        .collect();

    ModeRanking { ordered, totals }
}
