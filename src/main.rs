//! wordraw - CLI
//!
//! Searches a Wordle dictionary for guesses whose tile colorings paint a
//! requested picture against a target word.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordraw::{
    commands::{DrawConfig, compare_pair, run_draw},
    output::{print_compare_result, print_draw_result},
    wordlists::{WORDS, loader::load_from_file},
};

/// Modes tried when none are given, in tie-break priority order
const DEFAULT_MODES: &[&str] = &["x/gy", "gy/x", "y/gx", "x/yg", "yg/x"];

/// Target played against when none is given
const DEFAULT_TARGET: &str = "thick";

/// Tied candidates shown per round when --top is not given
const DEFAULT_TOP: usize = 1;

#[derive(Parser)]
#[command(
    name = "wordraw",
    about = "Find Wordle guesses that paint a requested visual pattern",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for words that draw a pattern (default command)
    Draw {
        /// Target 5-letter word the board is played against
        #[arg(short, long, default_value = DEFAULT_TARGET)]
        target: String,

        /// Message to render via the built-in 6x5 font (default: a heart)
        #[arg(short, long)]
        message: Option<String>,

        /// Mode strings to try, e.g. 'x/gy' or 'y/g/x'
        #[arg(long, num_args = 1.., default_values_t = DEFAULT_MODES.iter().map(ToString::to_string))]
        modes: Vec<String>,

        /// How many tied candidate words to show per round
        #[arg(long, default_value_t = DEFAULT_TOP)]
        top: usize,
    },

    /// Show the tile pattern for a single guess/target pair
    Compare {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(WORDS.iter().map(ToString::to_string).collect()),
        path => Ok(load_from_file(path)?),
    }
}

/// The command run when none is given: draw the heart board with the same
/// defaults the `draw` arm declares
fn default_draw_command() -> Commands {
    Commands::Draw {
        target: DEFAULT_TARGET.to_string(),
        message: None,
        modes: DEFAULT_MODES.iter().map(ToString::to_string).collect(),
        top: DEFAULT_TOP,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to drawing the heart board if no command given
    let command = cli.command.unwrap_or_else(default_draw_command);

    match command {
        Commands::Draw {
            target,
            message,
            modes,
            top,
        } => {
            let word_list = load_wordlist(&cli.wordlist)?;
            let config = DrawConfig {
                target,
                message,
                modes,
                top,
            };
            let result = run_draw(config, &word_list).map_err(|e| anyhow::anyhow!(e))?;
            print_draw_result(&result);
            Ok(())
        }
        Commands::Compare { guess, target } => {
            let result = compare_pair(&guess, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_compare_result(&result);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_falls_back_to_draw_defaults() {
        let cli = Cli::parse_from(["wordraw"]);
        assert!(cli.command.is_none());

        // The fallback must agree with what `draw` parses with no arguments
        let parsed = Cli::parse_from(["wordraw", "draw"]).command.unwrap();
        let (
            Commands::Draw {
                target: parsed_target,
                message: parsed_message,
                modes: parsed_modes,
                top: parsed_top,
            },
            Commands::Draw {
                target: fallback_target,
                message: fallback_message,
                modes: fallback_modes,
                top: fallback_top,
            },
        ) = (parsed, default_draw_command())
        else {
            panic!("expected draw commands");
        };

        assert_eq!(parsed_target, fallback_target);
        assert_eq!(parsed_message, fallback_message);
        assert_eq!(parsed_modes, fallback_modes);
        assert_eq!(parsed_top, fallback_top);
    }

    #[test]
    fn cli_arguments_parse() {
        Cli::parse_from(["wordraw", "draw", "-t", "crane", "--modes", "x/gy", "y/g/x"]);
        Cli::parse_from(["wordraw", "compare", "crazy", "cigar"]);
    }
}
