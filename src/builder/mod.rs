//! Builder API for ergonomic puzzle construction.
//!
//! This module provides a fluent builder and a macro for declaring
//! puzzles with minimal boilerplate while keeping the same validation as
//! [`Puzzle::new`].

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::solver::Puzzle;

/// Fluent builder for [`Puzzle`] values.
///
/// # Example
///
/// ```rust
/// use decant::builder::PuzzleBuilder;
///
/// let puzzle = PuzzleBuilder::new()
///     .goal(4)
///     .capacity(3)
///     .capacity(5)
///     .build()?;
///
/// assert_eq!(puzzle.goal(), 4);
/// # Ok::<(), decant::builder::BuildError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PuzzleBuilder {
    goal: Option<u32>,
    capacities: Vec<u32>,
}

impl PuzzleBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal quantity.
    pub fn goal(mut self, goal: u32) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Declare one container by its capacity.
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacities.push(capacity);
        self
    }

    /// Declare several containers at once.
    pub fn capacities<I>(mut self, capacities: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.capacities.extend(capacities);
        self
    }

    /// Build the puzzle.
    ///
    /// Fails with [`BuildError::MissingGoal`] when no goal was set, and
    /// with [`BuildError::Invalid`] for the same value errors
    /// [`Puzzle::new`] reports.
    pub fn build(self) -> Result<Puzzle, BuildError> {
        let goal = self.goal.ok_or(BuildError::MissingGoal)?;
        Ok(Puzzle::new(goal, &self.capacities)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InvalidValue;

    #[test]
    fn builder_assembles_a_puzzle() {
        let puzzle = PuzzleBuilder::new()
            .goal(4)
            .capacity(3)
            .capacity(5)
            .build()
            .unwrap();

        assert_eq!(puzzle.goal(), 4);
        assert_eq!(puzzle.start().len(), 2);
    }

    #[test]
    fn capacities_extends_in_bulk() {
        let puzzle = PuzzleBuilder::new()
            .goal(41)
            .capacities([4, 9, 17, 51])
            .build()
            .unwrap();

        assert_eq!(puzzle.start().len(), 4);
    }

    #[test]
    fn missing_goal_is_rejected() {
        let result = PuzzleBuilder::new().capacity(3).build();
        assert_eq!(result, Err(BuildError::MissingGoal));
    }

    #[test]
    fn value_errors_pass_through() {
        let result = PuzzleBuilder::new().goal(4).build();
        assert_eq!(result, Err(BuildError::Invalid(InvalidValue::NoCapacities)));

        let result = PuzzleBuilder::new().goal(4).capacity(0).build();
        assert_eq!(result, Err(BuildError::Invalid(InvalidValue::ZeroCapacity)));
    }
}
