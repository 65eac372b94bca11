//! Decant: a breadth-first solver for water pouring puzzles.
//!
//! Given a set of containers with fixed capacities, decant finds a
//! minimum-length sequence of fill/empty/pour moves that brings some
//! container to an exact target quantity.
//!
//! The crate is built from a pure core and a thin search shell: puzzle
//! states are immutable values with structural equality, moves are pure
//! functions producing new states, and the solver is an unweighted
//! breadth-first search with visited-set deduplication, so the first
//! solution it dequeues is guaranteed shortest.
//!
//! # Core Concepts
//!
//! - **Container**: an immutable vessel with a capacity and a fill level
//! - **Configuration**: an order-independent set of containers, one
//!   global puzzle state
//! - **Puzzle**: a validated goal plus the all-empty start configuration
//! - **Outcome**: a shortest solution path, or a first-class "no
//!   solution" result
//!
//! # Example
//!
//! ```rust
//! use decant::solver::{Outcome, Puzzle};
//!
//! // The classic two-jug puzzle: measure 4 units with a 3 and a 5.
//! let puzzle = Puzzle::new(4, &[3, 5])?;
//!
//! match puzzle.solve() {
//!     Outcome::Solved(solution) => {
//!         assert_eq!(solution.moves(), 6);
//!         println!("{solution}");
//!     }
//!     Outcome::NoSolution => println!("No solution possible."),
//! }
//! # Ok::<(), decant::core::InvalidValue>(())
//! ```

pub mod builder;
pub mod core;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{Configuration, Container, InvalidValue};
pub use builder::{BuildError, PuzzleBuilder};
pub use solver::{Outcome, Puzzle, Solution};
