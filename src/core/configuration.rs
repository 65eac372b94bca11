//! The Configuration value type.
//!
//! A configuration is one global state of the puzzle: the set of all
//! containers at a moment in time. Like [`Container`], it is an immutable
//! value: successors are new configurations, never in-place edits.

use super::container::Container;
use super::error::InvalidValue;
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// An immutable, order-independent collection of containers.
///
/// Identity is value based: two configurations are equal iff they contain
/// the same set of containers, regardless of the order the containers
/// were supplied in. Hashing is consistent with equality, so
/// configurations can key the solver's visited set directly.
///
/// Containers that are structurally identical (same capacity and same
/// level) collapse into a single set member. When a puzzle declares two
/// containers with equal capacity this merges states that differ only in
/// which physical vessel holds which quantity. That is a deliberate
/// modeling simplification carried over from the set-based
/// representation: equal containers are treated as interchangeable for
/// solving purposes.
///
/// # Example
///
/// ```rust
/// use decant::core::{Configuration, Container};
///
/// let a = Configuration::new([Container::new(5, 3)?, Container::new(9, 0)?])?;
/// let b = Configuration::new([Container::new(9, 0)?, Container::new(5, 3)?])?;
///
/// assert_eq!(a, b); // order of construction is irrelevant
/// # Ok::<(), decant::core::InvalidValue>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct Configuration {
    containers: BTreeSet<Container>,
}

/// Unvalidated mirror of [`Configuration`] used to route deserialization
/// through [`Configuration::new`], so serde input cannot produce an
/// empty configuration.
#[derive(Deserialize)]
struct RawConfiguration {
    containers: BTreeSet<Container>,
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = InvalidValue;

    fn try_from(raw: RawConfiguration) -> Result<Self, Self::Error> {
        Configuration::new(raw.containers)
    }
}

impl Configuration {
    /// Build a configuration from a collection of containers.
    ///
    /// Fails with [`InvalidValue::EmptyConfiguration`] if the collection
    /// yields no containers. Duplicate containers collapse.
    pub fn new<I>(containers: I) -> Result<Self, InvalidValue>
    where
        I: IntoIterator<Item = Container>,
    {
        let containers: BTreeSet<Container> = containers.into_iter().collect();
        if containers.is_empty() {
            return Err(InvalidValue::EmptyConfiguration);
        }
        Ok(Configuration { containers })
    }

    /// Build a configuration from an already-collected set.
    ///
    /// Callers must guarantee the set is non-empty; the solver's move
    /// generation always replaces containers rather than removing the
    /// last one.
    pub(crate) fn from_set(containers: BTreeSet<Container>) -> Self {
        debug_assert!(!containers.is_empty());
        Configuration { containers }
    }

    /// Iterate over the contained containers.
    ///
    /// The iteration order is deterministic for a given set but is not
    /// part of the configuration's identity; callers must not rely on it
    /// for anything beyond display.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.containers.iter(),
        }
    }

    /// The number of distinct containers.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Whether the configuration is empty. Always false for values built
    /// through [`Configuration::new`].
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Whether any container currently holds exactly `goal`.
    ///
    /// This is the solution test: a configuration solves a puzzle when
    /// the goal quantity sits in some container.
    pub fn contains_level(&self, goal: u32) -> bool {
        self.containers.iter().any(|c| c.level() == goal)
    }

    pub(crate) fn container_set(&self) -> &BTreeSet<Container> {
        &self.containers
    }
}

/// Restartable iterator over a configuration's containers.
pub struct Iter<'a> {
    inner: btree_set::Iter<'a, Container>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Container;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = &'a Container;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for container in &self.containers {
            writeln!(f, "{container}")?;
        }
        Ok(())
    }
}
