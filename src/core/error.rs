//! Value errors for containers, configurations, and puzzle inputs.

use thiserror::Error;

/// Errors raised at construction time for malformed values.
///
/// These are programming/input errors, not transient conditions: they are
/// reported synchronously and never retried. The search itself is pure
/// computation over already-validated values and cannot fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    #[error("container capacity must be positive")]
    ZeroCapacity,

    #[error("container level {level} exceeds capacity {capacity}")]
    LevelExceedsCapacity { level: u32, capacity: u32 },

    #[error("configuration must contain at least one container")]
    EmptyConfiguration,

    #[error("puzzle must declare at least one container capacity")]
    NoCapacities,
}
