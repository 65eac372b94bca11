//! Four containers, goal 41: a larger instance with timing output.

use decant::puzzle;
use std::time::Instant;

fn main() -> Result<(), decant::builder::BuildError> {
    let puzzle = puzzle! {
        goal: 41,
        capacities: [4, 9, 17, 51],
    }?;

    let started = Instant::now();
    let outcome = puzzle.solve();
    let elapsed = started.elapsed();

    println!("{outcome}");
    println!("Time: {elapsed:?}");
    Ok(())
}
