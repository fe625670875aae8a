//! Core domain types for pattern drawing
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond hashing. All types here are pure, testable, and have clear mathematical
//! properties.

mod pattern;
mod word;

pub use pattern::{Color, Pattern};
pub use word::{Word, WordError};
