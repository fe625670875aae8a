//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing. Everything here is
//! read-only over search results.

pub mod display;
pub mod formatters;

pub use display::{print_compare_result, print_draw_result};
