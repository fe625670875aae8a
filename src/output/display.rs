//! Display functions for command results

use super::formatters::{pattern_letters, pattern_tiles, requested_tiles};
use crate::commands::{CompareResult, DrawResult};
use crate::core::Pattern;
use colored::Colorize;

/// Print the full board results, best-ranked mode first
pub fn print_draw_result(result: &DrawResult) {
    for mode_text in &result.ranking.ordered {
        let Some(mode_index) = result.search.mode_index(mode_text) else {
            continue;
        };
        let mode = &result.search.modes()[mode_index];

        println!("\n{}", "─".repeat(60).cyan());
        println!(
            "Mode: {} (Total Rating: {})",
            mode_text.bright_yellow().bold(),
            result.ranking.total(mode_text)
        );
        println!("{}", "─".repeat(60).cyan());

        for (pattern_index, pattern_group) in result.patterns.iter().enumerate() {
            if result.patterns.len() > 1 {
                println!("\n{}", format!("Board {}", pattern_index + 1).bright_cyan());
            }

            let Some(mode_result) = result.search.mode_result(pattern_index, mode_index) else {
                continue;
            };

            for (round, slot) in mode_result.rounds.iter().enumerate() {
                let wanted = requested_tiles(&pattern_group[round], mode);

                match slot.candidates.first() {
                    Some(best) => {
                        let achieved = candidate_pattern(result, best);
                        let shown: Vec<&str> = slot
                            .candidates
                            .iter()
                            .take(result.top)
                            .map(String::as_str)
                            .collect();
                        println!(
                            "Round {}: {} → {} ({})  Rating: {}  {}",
                            round + 1,
                            wanted,
                            pattern_tiles(achieved),
                            pattern_letters(achieved),
                            slot.rating,
                            shown.join(", ").bright_yellow()
                        );
                    }
                    None => {
                        println!(
                            "Round {}: {} → {}",
                            round + 1,
                            wanted,
                            "no candidate".bright_black()
                        );
                    }
                }
            }
        }
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MODE RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    for (place, mode_text) in result.ranking.ordered.iter().enumerate() {
        println!(
            "  {}. {} — {}",
            place + 1,
            mode_text.bright_yellow(),
            result.ranking.total(mode_text)
        );
    }
}

/// Recompute the pattern a candidate word paints against the target
fn candidate_pattern(result: &DrawResult, candidate: &str) -> Pattern {
    // Candidates came out of the scan, so they are always valid words
    let word = crate::core::Word::new(candidate).expect("scan only emits valid words");
    Pattern::calculate(&word, result.search.target())
}

/// Print a single guess/target comparison
pub fn print_compare_result(result: &CompareResult) {
    println!(
        "{} vs {}: {} ({})",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.target.text().to_uppercase().bright_yellow().bold(),
        pattern_tiles(result.pattern),
        pattern_letters(result.pattern)
    );
    if result.pattern.is_perfect() {
        println!("{}", "Exact match!".green().bold());
    }
}
