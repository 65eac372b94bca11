//! Build errors for the puzzle builder.

use crate::core::InvalidValue;
use thiserror::Error;

/// Errors that can occur when building a puzzle through the builder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Goal quantity not specified. Call .goal(quantity) before .build()")]
    MissingGoal,

    #[error(transparent)]
    Invalid(#[from] InvalidValue),
}
