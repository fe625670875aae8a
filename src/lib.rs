//! wordraw
//!
//! Finds Wordle guesses that paint a requested visual pattern against a fixed
//! target word: six rounds of tiles become six rows of pixels, and a mode
//! decides which colors count as "lit".
//!
//! # Quick Start
//!
//! ```rust
//! use wordraw::core::{Pattern, Word};
//!
//! let guess = Word::new("crazy").unwrap();
//! let target = Word::new("cigar").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &target);
//! println!("Tiles: {pattern}");
//! ```

// Core domain types
pub mod core;

// Color grouping modes
pub mod mode;

// Pattern-match ratings
pub mod rating;

// Dictionary search and mode ranking
pub mod search;

// Message-to-pattern rendering
pub mod message;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
