//! The classic two-jug puzzle: measure 4 units with a 3 and a 5.

use decant::solver::Puzzle;

fn main() -> Result<(), decant::core::InvalidValue> {
    let puzzle = Puzzle::new(4, &[3, 5])?;
    println!("{}", puzzle.solve());
    Ok(())
}
