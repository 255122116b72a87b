//! Prioritized collision records.
//!
//! A [`Collision`] remembers which collider was "one" and which was the
//! "other" when it was created; handling preserves that order. Its priority
//! decides when it is handled relative to the other tracked collisions:
//! lower values are more urgent.

use std::fmt;

use crate::dispatch::collidable::Collidable;
use crate::dispatch::error::CollisionError;
use crate::dispatch::key::collision_key;

/// Handling urgency on a 0..=5 scale. `0` is handled first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    /// Most urgent priority.
    pub const HIGHEST: Priority = Priority(0);
    /// Least urgent priority.
    pub const LOWEST: Priority = Priority(5);
    /// Priority of collisions created without one.
    pub const DEFAULT: Priority = Priority::LOWEST;

    /// Validate a raw priority value.
    pub fn new(value: u8) -> Result<Self, CollisionError> {
        if value > Self::LOWEST.0 {
            return Err(CollisionError::PriorityOutOfRange(value));
        }
        Ok(Priority(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::DEFAULT
    }
}

impl TryFrom<u8> for Priority {
    type Error = CollisionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Priority::new(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable, prioritized collision between two colliders.
#[derive(Clone, Debug)]
pub struct Collision<C> {
    one: C,
    other: C,
    priority: Priority,
    key: String,
}

impl<C: Collidable> Collision<C> {
    /// Collision with [`Priority::DEFAULT`].
    pub fn new(one: C, other: C) -> Self {
        Self::with_priority(one, other, Priority::DEFAULT)
    }

    pub fn with_priority(one: C, other: C, priority: Priority) -> Self {
        let key = collision_key(&one, &other);
        Collision {
            one,
            other,
            priority,
            key,
        }
    }
}

impl<C> Collision<C> {
    /// "One" of the colliders, as given at creation.
    pub fn one(&self) -> &C {
        &self.one
    }

    /// The "other" collider, as given at creation.
    pub fn other(&self) -> &C {
        &self.other
    }

    /// Peer of `collider` within this pair.
    ///
    /// Selection is by identity, not equality: only a reference to the stored
    /// "one" (as returned by [`Collision::one`]) selects the other collider.
    /// Any other reference selects "one".
    pub fn the_other(&self, collider: &C) -> &C {
        if std::ptr::eq(collider, &self.one) {
            &self.other
        } else {
            &self.one
        }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Strategy key for this pair, `one` first.
    pub fn collision_key(&self) -> &str {
        &self.key
    }

    /// Give back the colliders, `one` first.
    pub fn into_pair(self) -> (C, C) {
        (self.one, self.other)
    }
}
