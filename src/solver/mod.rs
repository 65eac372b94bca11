//! The search engine.
//!
//! This module turns the pure value model from [`crate::core`] into a
//! solver:
//! - `moves`: one-move successor generation for a configuration
//! - `engine`: the `Puzzle` type and its breadth-first search driver
//! - `solution`: the `Outcome`/`Solution` result types and rendering

mod engine;
mod moves;
mod solution;

pub use engine::Puzzle;
pub use moves::successors;
pub use solution::{Outcome, Solution};
