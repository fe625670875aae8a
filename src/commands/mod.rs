//! Command implementations

pub mod compare;
pub mod draw;

pub use compare::{CompareResult, compare_pair};
pub use draw::{DrawConfig, DrawResult, run_draw};
