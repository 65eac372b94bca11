//! Search results and their rendering.

use crate::core::Configuration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of running a puzzle to completion.
///
/// "No solution" is a first-class result, not an error: the search
/// cannot fail at runtime, it can only finish with or without a path.
/// The feasibility pre-check and search exhaustion both surface as
/// [`Outcome::NoSolution`] and are deliberately not distinguished.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A shortest start-to-goal sequence was found.
    Solved(Solution),
    /// The goal quantity is unreachable.
    NoSolution,
}

impl Outcome {
    /// Whether a solution was found.
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    /// The solution, if one was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            Outcome::NoSolution => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Solved(solution) => solution.fmt(f),
            Outcome::NoSolution => write!(f, "No solution possible."),
        }
    }
}

/// A shortest move sequence, stored as the ordered configurations from
/// the start state to the first state containing the goal quantity.
///
/// The move count is the number of transitions, one less than the number
/// of steps; a puzzle whose start state already satisfies the goal is
/// solved in zero moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    steps: Vec<Configuration>,
}

impl Solution {
    pub(crate) fn new(steps: Vec<Configuration>) -> Self {
        debug_assert!(!steps.is_empty());
        Solution { steps }
    }

    /// The number of moves: fills, empties, and pours performed.
    pub fn moves(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// The configurations traversed, start first, goal last.
    pub fn steps(&self) -> &[Configuration] {
        &self.steps
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# moves: {}", self.moves())?;
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "Step {index}:")?;
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Container;

    fn config(pairs: &[(u32, u32)]) -> Configuration {
        Configuration::new(
            pairs
                .iter()
                .map(|&(capacity, level)| Container::new(capacity, level).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn moves_is_one_less_than_step_count() {
        let solution = Solution::new(vec![
            config(&[(5, 0)]),
            config(&[(5, 5)]),
            config(&[(5, 0)]),
        ]);
        assert_eq!(solution.moves(), 2);
    }

    #[test]
    fn single_step_solution_has_zero_moves() {
        let solution = Solution::new(vec![config(&[(5, 0)])]);
        assert_eq!(solution.moves(), 0);
    }

    #[test]
    fn no_solution_renders_fixed_indicator() {
        assert_eq!(Outcome::NoSolution.to_string(), "No solution possible.");
    }

    #[test]
    fn solved_outcome_renders_move_count_and_steps() {
        let outcome = Outcome::Solved(Solution::new(vec![
            config(&[(5, 0)]),
            config(&[(5, 5)]),
        ]));

        let rendered = outcome.to_string();
        assert!(rendered.starts_with("# moves: 1\n"));
        assert!(rendered.contains("Step 0:\ncapacity 5, level 0\n"));
        assert!(rendered.contains("Step 1:\ncapacity 5, level 5\n"));
    }

    #[test]
    fn solution_accessor_matches_variant() {
        let solution = Solution::new(vec![config(&[(5, 0)])]);
        let solved = Outcome::Solved(solution.clone());

        assert!(solved.is_solved());
        assert_eq!(solved.solution(), Some(&solution));
        assert!(!Outcome::NoSolution.is_solved());
        assert_eq!(Outcome::NoSolution.solution(), None);
    }

    #[test]
    fn outcome_serializes_correctly() {
        let outcome = Outcome::Solved(Solution::new(vec![
            config(&[(5, 0), (3, 0)]),
            config(&[(5, 5), (3, 0)]),
        ]));

        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
