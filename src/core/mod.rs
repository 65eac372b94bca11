//! Core value types of the puzzle.
//!
//! This module contains the pure value model:
//! - `Container`: an immutable vessel with capacity and fill level
//! - `Configuration`: an order-independent set of containers, one global
//!   puzzle state
//! - `InvalidValue`: construction-time validation errors
//!
//! Everything here is pure (no side effects): transformations return new
//! values and never mutate in place.

mod configuration;
mod container;
mod error;

pub use configuration::{Configuration, Iter};
pub use container::Container;
pub use error::InvalidValue;
