//! The breadth-first search driver.
//!
//! The engine explores the graph of configurations reachable from the
//! all-empty start state. Every move costs one, so plain breadth-first
//! order guarantees the first solution dequeued uses the minimum number
//! of moves. Deduplication through the visited set is what keeps the
//! walk tractable: without it the branching factor (empties + fills +
//! ordered pour pairs) revisits exponentially many duplicate states.

use super::moves::successors;
use super::solution::{Outcome, Solution};
use crate::core::{Configuration, Container, InvalidValue};
use std::collections::{HashSet, VecDeque};

/// Arena-allocated search node: a configuration plus a back-reference to
/// the node that produced it. The parent indices form a tree rooted at
/// the start state, walked backwards once a solution is found.
struct Node {
    configuration: Configuration,
    parent: Option<usize>,
}

/// A validated puzzle instance: a goal quantity and a start configuration
/// with one container per declared capacity, all at level zero.
///
/// # Example
///
/// ```rust
/// use decant::solver::Puzzle;
///
/// let puzzle = Puzzle::new(4, &[3, 5])?;
/// let outcome = puzzle.solve();
///
/// assert_eq!(outcome.solution().map(|s| s.moves()), Some(6));
/// # Ok::<(), decant::core::InvalidValue>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    goal: u32,
    start: Configuration,
}

impl Puzzle {
    /// Create a puzzle from a goal quantity and container capacities.
    ///
    /// Fails with [`InvalidValue::NoCapacities`] when `capacities` is
    /// empty and with [`InvalidValue::ZeroCapacity`] when any capacity is
    /// zero. Capacities may repeat; structurally identical containers
    /// collapse in the start configuration (see [`Configuration`]).
    pub fn new(goal: u32, capacities: &[u32]) -> Result<Self, InvalidValue> {
        if capacities.is_empty() {
            return Err(InvalidValue::NoCapacities);
        }
        let containers = capacities
            .iter()
            .map(|&capacity| Container::new(capacity, 0))
            .collect::<Result<Vec<_>, _>>()?;
        let start = Configuration::new(containers)?;
        Ok(Puzzle { goal, start })
    }

    /// The target quantity.
    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// The start configuration (every container at level zero).
    pub fn start(&self) -> &Configuration {
        &self.start
    }

    /// Whether some container can hold strictly more than the goal.
    ///
    /// A conservative pre-check only: it rules out goals that cannot fit
    /// below any container's rim, but not goals unreachable for
    /// number-theoretic reasons (those exhaust the search instead).
    fn is_feasible(&self) -> bool {
        self.start.iter().any(|c| c.capacity() > self.goal)
    }

    /// Run the search to completion and report the outcome.
    ///
    /// Returns [`Outcome::Solved`] with a shortest start-to-goal sequence
    /// of configurations, or [`Outcome::NoSolution`] when the goal is
    /// unreachable, whether that was decided by the feasibility
    /// pre-check or by exhausting the reachable state space.
    ///
    /// The search is synchronous pure computation: no I/O, no suspension
    /// points, single-threaded. All visited states and their ancestry are
    /// retained until the result is built, then released as a unit.
    pub fn solve(&self) -> Outcome {
        if !self.is_feasible() {
            return Outcome::NoSolution;
        }

        let mut arena = vec![Node {
            configuration: self.start.clone(),
            parent: None,
        }];
        let mut visited: HashSet<Configuration> = HashSet::new();
        visited.insert(self.start.clone());
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(0);

        while let Some(&front) = queue.front() {
            if arena[front].configuration.contains_level(self.goal) {
                return Outcome::Solved(reconstruct(&arena, front));
            }
            queue.pop_front();

            for neighbor in successors(&arena[front].configuration) {
                if visited.insert(neighbor.clone()) {
                    arena.push(Node {
                        configuration: neighbor,
                        parent: Some(front),
                    });
                    queue.push_back(arena.len() - 1);
                }
            }
        }

        Outcome::NoSolution
    }
}

/// Walk parent links from the solution node back to the root, then
/// reverse to obtain the start-to-goal step sequence.
fn reconstruct(arena: &[Node], terminal: usize) -> Solution {
    let mut steps = Vec::new();
    let mut current = Some(terminal);
    while let Some(index) = current {
        steps.push(arena[index].configuration.clone());
        current = arena[index].parent;
    }
    steps.reverse();
    Solution::new(steps)
}
