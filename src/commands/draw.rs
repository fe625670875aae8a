//! Board drawing command
//!
//! Resolves the requested patterns (message or default heart), runs the
//! dictionary scan and ranks the modes.

use crate::core::Word;
use crate::message::{heart_pattern, string_to_patterns};
use crate::mode::Mode;
use crate::search::{ModeRanking, PatternGroup, SearchResult, find_words, rank_modes};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Configuration for drawing a board
pub struct DrawConfig {
    pub target: String,
    pub message: Option<String>,
    pub modes: Vec<String>,
    /// How many tied candidates to show per round
    pub top: usize,
}

/// Result of a draw run
#[derive(Debug)]
pub struct DrawResult {
    pub search: SearchResult,
    pub ranking: ModeRanking,
    pub patterns: Vec<PatternGroup>,
    pub top: usize,
}

/// Run the search for every requested pattern and rank the modes
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 ASCII letters)
/// - Any mode string is malformed (reported before scanning starts)
pub fn run_draw<S>(config: DrawConfig, word_list: &[S]) -> Result<DrawResult, String>
where
    S: AsRef<str> + Sync,
{
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    // A malformed mode is a fatal configuration error; fail before the scan
    let modes: Vec<Mode> = config
        .modes
        .iter()
        .map(|text| Mode::parse(text).map_err(|e| format!("Invalid mode: {e}")))
        .collect::<Result<_, _>>()?;

    let patterns: Vec<PatternGroup> = match &config.message {
        Some(message) => string_to_patterns(message),
        None => vec![heart_pattern()],
    };

    let pb = scan_progress(word_list.len(), patterns.len(), modes.len());
    let search = find_words(word_list, &target, &patterns, &modes);
    pb.finish_and_clear();

    let ranking = rank_modes(&search);

    Ok(DrawResult {
        search,
        ranking,
        patterns,
        top: config.top.max(1),
    })
}

fn scan_progress(words: usize, patterns: usize, modes: usize) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!(
        "Scanning {words} words across {patterns} pattern(s) and {modes} mode(s)..."
    ));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
