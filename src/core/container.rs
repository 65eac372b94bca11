//! The Container value type.
//!
//! A container is an immutable vessel with a fixed capacity and a current
//! fill level. All transformations are pure: they return new values and
//! never mutate the receiver, so search branches can share containers
//! freely without any locking discipline.

use super::error::InvalidValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable vessel with a fixed capacity and a current fill level.
///
/// Two containers are equal iff both capacity and level match; hashing is
/// consistent with equality, so containers can key hash sets directly.
/// Quantities are `u32`, which makes negative capacities and levels
/// unrepresentable; the remaining invariants (`capacity > 0`,
/// `level <= capacity`) are enforced at construction.
///
/// # Example
///
/// ```rust
/// use decant::core::Container;
///
/// let jug = Container::new(5, 0)?;
/// let full = jug.filled();
///
/// assert_eq!(full.level(), 5);
/// assert_eq!(jug.level(), 0); // original unchanged
/// # Ok::<(), decant::core::InvalidValue>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawContainer")]
pub struct Container {
    capacity: u32,
    level: u32,
}

/// Unvalidated mirror of [`Container`] used to route deserialization
/// through [`Container::new`], so serde input cannot violate the
/// invariant.
#[derive(Deserialize)]
struct RawContainer {
    capacity: u32,
    level: u32,
}

impl TryFrom<RawContainer> for Container {
    type Error = InvalidValue;

    fn try_from(raw: RawContainer) -> Result<Self, Self::Error> {
        Container::new(raw.capacity, raw.level)
    }
}

impl Container {
    /// Create a container with the given capacity and fill level.
    ///
    /// Fails with [`InvalidValue::ZeroCapacity`] if `capacity` is zero and
    /// with [`InvalidValue::LevelExceedsCapacity`] if `level > capacity`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::core::{Container, InvalidValue};
    ///
    /// assert!(Container::new(5, 3).is_ok());
    /// assert_eq!(Container::new(0, 0), Err(InvalidValue::ZeroCapacity));
    /// assert!(Container::new(3, 4).is_err());
    /// ```
    pub fn new(capacity: u32, level: u32) -> Result<Self, InvalidValue> {
        if capacity == 0 {
            return Err(InvalidValue::ZeroCapacity);
        }
        if level > capacity {
            return Err(InvalidValue::LevelExceedsCapacity { level, capacity });
        }
        Ok(Container { capacity, level })
    }

    /// The maximum quantity this container can hold.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// The quantity currently held.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Whether the container holds nothing.
    pub fn is_empty(&self) -> bool {
        self.level == 0
    }

    /// Whether the container is filled to capacity.
    pub fn is_full(&self) -> bool {
        self.level == self.capacity
    }

    /// A container with the same capacity and level zero.
    ///
    /// Returns `self` unchanged when already empty; equality is value
    /// based, so this short-circuit is not observable.
    pub fn emptied(&self) -> Self {
        if self.level == 0 {
            return *self;
        }
        Container {
            capacity: self.capacity,
            level: 0,
        }
    }

    /// A container with the same capacity, filled to the rim.
    pub fn filled(&self) -> Self {
        if self.level == self.capacity {
            return *self;
        }
        Container {
            capacity: self.capacity,
            level: self.capacity,
        }
    }

    /// Pour from `self` into `dest` until `dest` is full or `self` is
    /// empty, returning `(new_source, new_dest)`.
    ///
    /// A blocked transfer (`dest` already full, or `self` empty) returns
    /// both values unchanged. Pour is total over valid containers and
    /// conserves the summed level of the pair.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::core::Container;
    ///
    /// let five = Container::new(5, 5)?;
    /// let three = Container::new(3, 0)?;
    ///
    /// let (five, three) = five.pour_into(three);
    /// assert_eq!(five.level(), 2);
    /// assert_eq!(three.level(), 3);
    /// # Ok::<(), decant::core::InvalidValue>(())
    /// ```
    pub fn pour_into(&self, dest: Container) -> (Container, Container) {
        if dest.is_full() || self.is_empty() {
            return (*self, dest);
        }

        let amount = self.level.min(dest.capacity - dest.level);

        let new_source = Container {
            capacity: self.capacity,
            level: self.level - amount,
        };
        let new_dest = Container {
            capacity: dest.capacity,
            level: dest.level + amount,
        };
        (new_source, new_dest)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity {}, level {}", self.capacity, self.level)
    }
}
