//! Macros for declarative puzzle construction.

/// Declare a puzzle from a goal and a capacity list.
///
/// Expands to a [`PuzzleBuilder`](crate::builder::PuzzleBuilder) chain
/// and yields `Result<Puzzle, BuildError>`.
///
/// # Example
///
/// ```
/// use decant::puzzle;
///
/// let puzzle = puzzle! {
///     goal: 4,
///     capacities: [3, 5],
/// }?;
///
/// assert_eq!(puzzle.goal(), 4);
/// # Ok::<(), decant::builder::BuildError>(())
/// ```
#[macro_export]
macro_rules! puzzle {
    (
        goal: $goal:expr,
        capacities: [$($capacity:expr),* $(,)?] $(,)?
    ) => {
        $crate::builder::PuzzleBuilder::new()
            .goal($goal)
            $(.capacity($capacity))*
            .build()
    };
}
